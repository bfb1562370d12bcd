pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;
pub mod spinner;

pub use badge::StatusBadge;
pub use button::{Button, ButtonVariant};
pub use card::{Card, StatCard};
pub use form::{FormField, SelectField};
pub use layout::PortalLayout;
pub use spinner::{CardSkeleton, Spinner};
