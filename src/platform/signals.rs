//! Maps process signals onto loop control.
//!
//! SIGUSR1 refreshes immediately; SIGINT and SIGTERM stop the loop after the
//! current cycle. Handlers run on helper threads owned by `ctrlc` and
//! `signal-hook`, and only call into [`LoopControl`].

use crate::core::control::LoopControl;
use crate::error::{Result, StatusError};

/// What a signal does to the refresh loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalEffect {
    Wake,
    Terminate,
}

/// Effect of a raw signal number, if the loop consumes it
#[cfg(unix)]
pub fn effect_of(signal: i32) -> Option<SignalEffect> {
    use signal_hook::consts::{SIGINT, SIGTERM, SIGUSR1};

    match signal {
        SIGUSR1 => Some(SignalEffect::Wake),
        SIGINT | SIGTERM => Some(SignalEffect::Terminate),
        _ => None,
    }
}

/// Apply an effect to the loop
pub fn apply(control: &LoopControl, effect: SignalEffect) {
    match effect {
        SignalEffect::Wake => control.request_wake(),
        SignalEffect::Terminate => control.request_stop(),
    }
}

/// Install handlers for the wake and terminate signals.
pub fn install(control: &LoopControl) -> Result<()> {
    let on_interrupt = control.clone();
    ctrlc::set_handler(move || {
        log::debug!("SIGINT received");
        apply(&on_interrupt, SignalEffect::Terminate);
    })
    .map_err(|e| StatusError::signal(format!("SIGINT: {}", e)))?;

    #[cfg(unix)]
    {
        use signal_hook::consts::{SIGTERM, SIGUSR1};
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGTERM, SIGUSR1])
            .map_err(|e| StatusError::signal(format!("SIGTERM/SIGUSR1: {}", e)))?;
        let control = control.clone();
        std::thread::Builder::new()
            .name("signals".to_string())
            .spawn(move || {
                for signal in signals.forever() {
                    if let Some(effect) = effect_of(signal) {
                        log::debug!("signal {} received: {:?}", signal, effect);
                        apply(&control, effect);
                    }
                }
            })?;
    }

    Ok(())
}
