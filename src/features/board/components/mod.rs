pub mod column;
pub mod composer;
pub mod export_panel;
pub mod notice;
pub mod task_card;

pub use column::BoardColumn;
pub use composer::TaskComposer;
pub use export_panel::ExportPanel;
pub use notice::{Notice, NoticeBanner, NoticeKind};
pub use task_card::TaskCard;
