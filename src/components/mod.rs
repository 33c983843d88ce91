pub mod app;
pub mod auth_view;
pub mod dashboard;
pub mod delete_modal;
pub mod payment_card;
pub mod toast;
pub mod update_modal;

pub use app::App;
pub use auth_view::AuthView;
pub use dashboard::Dashboard;
pub use delete_modal::DeleteModal;
pub use payment_card::PaymentCard;
pub use toast::Toast;
pub use update_modal::UpdateModal;
