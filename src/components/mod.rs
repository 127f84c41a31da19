pub mod address_dialog;
pub mod busca_por_cnpj;
pub mod busca_por_cpf;
pub mod pagination_controls;
pub mod search_bar;
pub mod snackbar;
pub mod title_form;
pub mod two_columns_form;
pub mod upload_images_modal;
pub mod user_popover;

pub use address_dialog::AddressDialog;
pub use busca_por_cnpj::BuscaPorCnpj;
pub use busca_por_cpf::BuscaPorCpf;
pub use pagination_controls::PaginationControls;
pub use search_bar::SearchBar;
pub use snackbar::{Snackbar, TipoMensagem};
pub use title_form::TitleForm;
pub use two_columns_form::TwoColumnsForm;
pub use upload_images_modal::UploadImagesModal;
pub use user_popover::UserPopover;
