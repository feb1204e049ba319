pub mod describe;
pub mod edit;
pub mod failure;
pub mod imagine;
pub mod task;
pub mod text;
pub mod translate;
pub mod video;

pub use describe::format_describe_result;
pub use edit::format_edit_result;
pub use failure::format_error;
pub use imagine::format_imagine_result;
pub use task::format_task_result;
pub use translate::format_translate_result;
pub use video::format_video_result;
