pub mod figure_view;
pub mod input_view;
pub mod notice_view;

pub use figure_view::FigureView;
pub use input_view::InputView;
pub use notice_view::show_notice;
