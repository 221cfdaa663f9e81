//! Shared UI components

pub mod button;
pub mod helpers;
pub mod result_card;
pub mod search_form;
pub mod search_view;
pub mod text_input;
pub mod utils;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use helpers::{LoadingSpinner, PageContainer};
pub use result_card::ResultCard;
pub use search_form::SearchFormView;
pub use search_view::SearchView;
pub use text_input::TextInput;
pub use utils::{authors_line, cover_alt, results_heading, save_button_label};
