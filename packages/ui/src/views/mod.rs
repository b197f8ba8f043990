mod index;
pub use index::IndexPage;

mod profile;
pub use profile::{ProfilePage, ProfilePageProps};

mod remarks_placeholder;
pub use remarks_placeholder::RemarksPlaceholder;

mod remarks;
pub use remarks::{remark_edit_handlers, RemarkOutlet, RemarksPage, RemarksPageProps};

mod remark_detail;
pub use remark_detail::RemarkDetail;

mod remark_editor;
pub use remark_editor::RemarkEditor;

mod error_page;
pub use error_page::{ErrorPage, ErrorPageProps};
