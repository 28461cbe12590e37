//! CGEventTap-based key monitor.
//!
//! The tap lives on its own thread with its own CFRunLoop. It listens only
//! and never modifies or swallows events. When the system disables the tap
//! it is switched back on; if that fails the run loop stops and the chord
//! sender is dropped.

use std::cell::Cell;
use std::ptr;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use cf_core::ports::{KeyChordSender, KeyMonitorError, KeyMonitorPort};
use cf_core::KeyChord;
use core_foundation::base::TCFType;
use core_foundation::mach_port::CFMachPortRef;
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop};
use core_graphics::event::{
    CGEvent, CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement,
    CGEventType, EventField,
};
use tracing::{debug, error, info, warn};

use super::flags::modifiers_from_flag_bits;

const THREAD_NAME: &str = "clipfile-key-monitor";

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {
    fn CGEventTapEnable(tap: CFMachPortRef, enable: bool);
    fn CGEventTapIsEnabled(tap: CFMachPortRef) -> bool;
}

#[derive(Debug, Default)]
pub struct EventTapKeyMonitor {
    running: Arc<AtomicBool>,
}

impl EventTapKeyMonitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyMonitorPort for EventTapKeyMonitor {
    fn start(&self, sink: KeyChordSender) -> Result<(), KeyMonitorError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(KeyMonitorError::AlreadyRunning);
        }

        let (ready_tx, ready_rx) = mpsc::channel();
        let running = Arc::clone(&self.running);
        let spawned = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run_tap(sink, ready_tx, running));

        if let Err(e) = spawned {
            self.running.store(false, Ordering::SeqCst);
            return Err(KeyMonitorError::TapCreation(e.to_string()));
        }

        match ready_rx.recv() {
            Ok(Ok(())) => {
                info!("Global key monitor started");
                Ok(())
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                self.running.store(false, Ordering::SeqCst);
                Err(KeyMonitorError::TapCreation(
                    "key monitor thread exited during startup".to_string(),
                ))
            }
        }
    }
}

fn chord_from_event(event: &CGEvent) -> KeyChord {
    let key_code = event.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE) as u16;
    KeyChord::new(key_code, modifiers_from_flag_bits(event.get_flags().bits()))
}

fn run_tap(
    sink: KeyChordSender,
    ready: mpsc::Sender<Result<(), KeyMonitorError>>,
    running: Arc<AtomicBool>,
) {
    // Set once the tap exists; the callback runs on this thread only.
    let tap_port: Rc<Cell<CFMachPortRef>> = Rc::new(Cell::new(ptr::null_mut()));
    let callback_port = Rc::clone(&tap_port);

    let tap = CGEventTap::new(
        CGEventTapLocation::Session,
        CGEventTapPlacement::HeadInsertEventTap,
        CGEventTapOptions::ListenOnly,
        vec![CGEventType::KeyDown],
        move |_proxy, event_type, event| {
            match event_type {
                CGEventType::KeyDown => {
                    if sink.send(chord_from_event(event)).is_err() {
                        debug!("Key chord receiver dropped");
                    }
                }
                CGEventType::TapDisabledByTimeout | CGEventType::TapDisabledByUserInput => {
                    warn!("Event tap disabled by the system");
                    reenable_tap(callback_port.get());
                }
                _ => {}
            }
            None
        },
    );

    let tap = match tap {
        Ok(tap) => tap,
        Err(()) => {
            running.store(false, Ordering::SeqCst);
            error!("CGEventTapCreate failed; accessibility permission is likely missing");
            let _ = ready.send(Err(KeyMonitorError::TapCreation(
                "CGEventTapCreate returned null".to_string(),
            )));
            return;
        }
    };

    tap_port.set(tap.mach_port.as_concrete_TypeRef());

    let source = match tap.mach_port.create_runloop_source(0) {
        Ok(source) => source,
        Err(()) => {
            running.store(false, Ordering::SeqCst);
            let _ = ready.send(Err(KeyMonitorError::TapCreation(
                "failed to create run loop source".to_string(),
            )));
            return;
        }
    };

    let run_loop = CFRunLoop::get_current();
    run_loop.add_source(&source, unsafe { kCFRunLoopCommonModes });
    tap.enable();
    let _ = ready.send(Ok(()));

    CFRunLoop::run_current();

    running.store(false, Ordering::SeqCst);
    info!("Global key monitor stopped");
}

/// Switch a disabled tap back on. Stops the current run loop when the
/// system refuses, which ends `run_tap` and drops the chord sender.
fn reenable_tap(port: CFMachPortRef) {
    if port.is_null() {
        return;
    }

    let enabled = unsafe {
        CGEventTapEnable(port, true);
        CGEventTapIsEnabled(port)
    };
    if enabled {
        info!("Event tap re-enabled");
    } else {
        error!("Event tap could not be re-enabled; stopping key monitor");
        CFRunLoop::get_current().stop();
    }
}
