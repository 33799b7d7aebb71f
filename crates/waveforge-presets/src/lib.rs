//! waveforge preset catalog
//!
//! A closed catalog of sound-effect recipes built on the
//! [`waveforge_synth`] engine: bells, buzzers, notifications, game
//! sounds, telephone signals, and assorted mechanical UI noises. Each
//! preset is pure data driving the engine, so rendering a preset with
//! the same seed and sample rate always produces the same buffer.
//!
//! ```no_run
//! use waveforge_presets::Preset;
//! use waveforge_synth::{SoundEngine, SynthResult};
//!
//! fn render_all() -> SynthResult<()> {
//!     let engine = SoundEngine::new(44100);
//!     for preset in Preset::all() {
//!         let audio = preset.render(&engine, 42)?;
//!         engine
//!             .quantize(&audio)
//!             .write_to_file(format!("{}.wav", preset.name()))?;
//!     }
//!     Ok(())
//! }
//! ```

use waveforge_synth::rng::{create_rng, derive_component_seed};
use waveforge_synth::{SoundEngine, SynthResult, WaveBuffer};

mod alerts;
mod bells;
mod game;
mod mechanical;
mod phone;
mod support;

pub use alerts::{AlarmKind, BeepKind, BuzzerKind, NotificationKind};
pub use bells::DoorbellKind;
pub use game::{BubbleKind, GameKind, SwooshKind};
pub use mechanical::{ClickKind, KeyboardKind, RegisterKind};
pub use phone::PhoneKind;

/// Tick-tock cycle count used by the catalog entry.
const TICK_TOCK_CYCLES: usize = 3;

/// One entry in the sound catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    SimpleBell,
    ChurchBell,
    HandBell,
    Buzzer(BuzzerKind),
    Doorbell(DoorbellKind),
    Notification(NotificationKind),
    Coin,
    Click(ClickKind),
    CashRegister(RegisterKind),
    Alarm(AlarmKind),
    Phone(PhoneKind),
    Game(GameKind),
    Swoosh(SwooshKind),
    SystemBeep(BeepKind),
    Keyboard(KeyboardKind),
    CameraShutter,
    Lock,
    Unlock,
    TickTock,
    Bubble(BubbleKind),
}

/// Every preset in the catalog, in catalog order.
const ALL: &[Preset] = &[
    Preset::SimpleBell,
    Preset::ChurchBell,
    Preset::HandBell,
    Preset::Buzzer(BuzzerKind::Error),
    Preset::Buzzer(BuzzerKind::Warning),
    Preset::Buzzer(BuzzerKind::Success),
    Preset::Doorbell(DoorbellKind::DingDong),
    Preset::Doorbell(DoorbellKind::Chime),
    Preset::Doorbell(DoorbellKind::Buzz),
    Preset::Notification(NotificationKind::Message),
    Preset::Notification(NotificationKind::Alert),
    Preset::Notification(NotificationKind::Complete),
    Preset::Notification(NotificationKind::Pop),
    Preset::Coin,
    Preset::Click(ClickKind::Soft),
    Preset::Click(ClickKind::Hard),
    Preset::Click(ClickKind::Mechanical),
    Preset::CashRegister(RegisterKind::Classic),
    Preset::CashRegister(RegisterKind::Modern),
    Preset::CashRegister(RegisterKind::ChaChing),
    Preset::Alarm(AlarmKind::WakeUp),
    Preset::Alarm(AlarmKind::Timer),
    Preset::Alarm(AlarmKind::Emergency),
    Preset::Phone(PhoneKind::Ringtone),
    Preset::Phone(PhoneKind::Busy),
    Preset::Phone(PhoneKind::DialTone),
    Preset::Game(GameKind::PowerUp),
    Preset::Game(GameKind::LevelUp),
    Preset::Game(GameKind::GameOver),
    Preset::Game(GameKind::Jump),
    Preset::Game(GameKind::Laser),
    Preset::Swoosh(SwooshKind::Short),
    Preset::Swoosh(SwooshKind::Medium),
    Preset::Swoosh(SwooshKind::Long),
    Preset::SystemBeep(BeepKind::Info),
    Preset::SystemBeep(BeepKind::Warning),
    Preset::SystemBeep(BeepKind::Error),
    Preset::SystemBeep(BeepKind::Critical),
    Preset::Keyboard(KeyboardKind::Mechanical),
    Preset::Keyboard(KeyboardKind::Soft),
    Preset::Keyboard(KeyboardKind::Typewriter),
    Preset::CameraShutter,
    Preset::Lock,
    Preset::Unlock,
    Preset::TickTock,
    Preset::Bubble(BubbleKind::Pop),
    Preset::Bubble(BubbleKind::Small),
    Preset::Bubble(BubbleKind::Large),
];

impl Preset {
    /// All catalog presets in a stable order.
    pub fn all() -> &'static [Preset] {
        ALL
    }

    /// Looks up a preset by its catalog name.
    pub fn from_name(name: &str) -> Option<Preset> {
        Self::all().iter().copied().find(|p| p.name() == name)
    }

    /// Stable catalog name, also used as the output file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::SimpleBell => "simple_bell",
            Preset::ChurchBell => "church_bell",
            Preset::HandBell => "hand_bell",
            Preset::Buzzer(BuzzerKind::Error) => "buzzer_error",
            Preset::Buzzer(BuzzerKind::Warning) => "buzzer_warning",
            Preset::Buzzer(BuzzerKind::Success) => "buzzer_success",
            Preset::Doorbell(DoorbellKind::DingDong) => "doorbell_ding_dong",
            Preset::Doorbell(DoorbellKind::Chime) => "doorbell_chime",
            Preset::Doorbell(DoorbellKind::Buzz) => "doorbell_buzz",
            Preset::Notification(NotificationKind::Message) => "notification_message",
            Preset::Notification(NotificationKind::Alert) => "notification_alert",
            Preset::Notification(NotificationKind::Complete) => "notification_complete",
            Preset::Notification(NotificationKind::Pop) => "notification_pop",
            Preset::Coin => "coin",
            Preset::Click(ClickKind::Soft) => "click_soft",
            Preset::Click(ClickKind::Hard) => "click_hard",
            Preset::Click(ClickKind::Mechanical) => "click_mechanical",
            Preset::CashRegister(RegisterKind::Classic) => "cash_register_classic",
            Preset::CashRegister(RegisterKind::Modern) => "cash_register_modern",
            Preset::CashRegister(RegisterKind::ChaChing) => "cash_register_cha_ching",
            Preset::Alarm(AlarmKind::WakeUp) => "alarm_wake_up",
            Preset::Alarm(AlarmKind::Timer) => "alarm_timer",
            Preset::Alarm(AlarmKind::Emergency) => "alarm_emergency",
            Preset::Phone(PhoneKind::Ringtone) => "phone_ringtone",
            Preset::Phone(PhoneKind::Busy) => "phone_busy",
            Preset::Phone(PhoneKind::DialTone) => "phone_dial_tone",
            Preset::Game(GameKind::PowerUp) => "game_power_up",
            Preset::Game(GameKind::LevelUp) => "game_level_up",
            Preset::Game(GameKind::GameOver) => "game_game_over",
            Preset::Game(GameKind::Jump) => "game_jump",
            Preset::Game(GameKind::Laser) => "game_laser",
            Preset::Swoosh(SwooshKind::Short) => "swoosh_short",
            Preset::Swoosh(SwooshKind::Medium) => "swoosh_medium",
            Preset::Swoosh(SwooshKind::Long) => "swoosh_long",
            Preset::SystemBeep(BeepKind::Info) => "system_beep_info",
            Preset::SystemBeep(BeepKind::Warning) => "system_beep_warning",
            Preset::SystemBeep(BeepKind::Error) => "system_beep_error",
            Preset::SystemBeep(BeepKind::Critical) => "system_beep_critical",
            Preset::Keyboard(KeyboardKind::Mechanical) => "keyboard_mechanical",
            Preset::Keyboard(KeyboardKind::Soft) => "keyboard_soft",
            Preset::Keyboard(KeyboardKind::Typewriter) => "keyboard_typewriter",
            Preset::CameraShutter => "camera_shutter",
            Preset::Lock => "lock",
            Preset::Unlock => "unlock",
            Preset::TickTock => "tick_tock",
            Preset::Bubble(BubbleKind::Pop) => "bubble_pop",
            Preset::Bubble(BubbleKind::Small) => "bubble_small",
            Preset::Bubble(BubbleKind::Large) => "bubble_large",
        }
    }

    /// Renders the preset to a floating-point buffer.
    ///
    /// Noise-using presets draw from a PCG32 stream derived from
    /// `(base_seed, name)`, so each preset gets an independent stream
    /// and the whole catalog is reproducible from one seed.
    pub fn render(&self, engine: &SoundEngine, base_seed: u32) -> SynthResult<WaveBuffer> {
        let mut rng = create_rng(derive_component_seed(base_seed, self.name()));
        match *self {
            Preset::SimpleBell => bells::simple_bell(engine),
            Preset::ChurchBell => bells::church_bell(engine),
            Preset::HandBell => bells::hand_bell(engine),
            Preset::Buzzer(kind) => alerts::buzzer(engine, kind),
            Preset::Doorbell(kind) => bells::doorbell(engine, kind),
            Preset::Notification(kind) => alerts::notification(engine, kind),
            Preset::Coin => game::coin(engine),
            Preset::Click(kind) => mechanical::click(engine, kind),
            Preset::CashRegister(kind) => mechanical::cash_register(engine, kind),
            Preset::Alarm(kind) => alerts::alarm(engine, kind),
            Preset::Phone(kind) => phone::phone(engine, kind),
            Preset::Game(kind) => game::game(engine, kind),
            Preset::Swoosh(kind) => game::swoosh(engine, kind, &mut rng),
            Preset::SystemBeep(kind) => alerts::system_beep(engine, kind),
            Preset::Keyboard(kind) => mechanical::keyboard(engine, kind, &mut rng),
            Preset::CameraShutter => mechanical::camera_shutter(engine, &mut rng),
            Preset::Lock => mechanical::lock(engine),
            Preset::Unlock => mechanical::unlock(engine),
            Preset::TickTock => mechanical::tick_tock(engine, TICK_TOCK_CYCLES),
            Preset::Bubble(kind) => game::bubble(engine, kind),
        }
    }
}
