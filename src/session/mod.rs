mod controller;
mod countdown;
mod events;
mod state;
mod view;

pub use controller::SessionController;
pub use state::SessionPhase;
pub use view::{CONFIRM_LABEL, Outcome, ScreenView, SessionView};
