use crate::scenario::{AlarmLayout, ScenarioKey};
use crate::session::{CONFIRM_LABEL, Outcome, ScreenView, SessionPhase, SessionView};
use crate::theme::Palette;
use eframe::egui::{self, RichText};

use super::state::{AlarmDrillApp, UiAction};
use super::widgets::{AlarmCard, PrimaryButton, section_label};

mod layout;
mod panels;
mod selector;
mod status;
