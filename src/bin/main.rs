// lcd-shield entry point and main loop
//
// Boot sequence: logger -> timer -> keypad hardware -> header on screen
// Main loop: request conversion -> wait (bounded) -> render -> sleep
//
// The periodic timer interrupt plays the conversion-complete handler:
// when the main loop has a request outstanding it samples the keypad
// divider, classifies the reading and latches the result. The main loop
// only reads the latch after its own request has completed.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use embedded_hal::delay::DelayNs;
use log::{info, warn};

use core::cell::RefCell;
use critical_section::Mutex;

use lcd_shield::board::Board;
use lcd_shield::drivers::clock::BootClock;
use lcd_shield::drivers::console::ConsoleDisplay;
use lcd_shield::drivers::keypad::KeypadSampler;
use lcd_shield_keypad::{ButtonScreen, Classifier, Conversion, KeypadConfig};

esp_bootloader_esp_idf::esp_app_desc!();

// how often the handler looks for an outstanding request
const CONVERSION_TICK_MS: u64 = 1;

// consecutive timeouts before the sampler's error count is reported
const TIMEOUT_REPORT_EVERY: u32 = 50;

static CONVERSION: Conversion = Conversion::new(Classifier::new());

static TIMER0: Mutex<RefCell<Option<PeriodicTimer<'static, esp_hal::Blocking>>>> =
    Mutex::new(RefCell::new(None));

static KEYPAD: Mutex<RefCell<Option<KeypadSampler>>> = Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn timer0_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }

        if !CONVERSION.is_pending() {
            return;
        }
        if let Some(keypad) = KEYPAD.borrow_ref_mut(cs).as_mut()
            && let Some(sample) = keypad.sample()
        {
            CONVERSION.complete(sample);
        }
    });
}

fn sampler_failures() -> u32 {
    critical_section::with(|cs| {
        KEYPAD
            .borrow_ref(cs)
            .as_ref()
            .map_or(0, KeypadSampler::failures)
    })
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let mut timer0 = PeriodicTimer::new(timg0.timer0);
    critical_section::with(|cs| {
        timer0.set_interrupt_handler(timer0_handler);
        timer0
            .start(Duration::from_millis(CONVERSION_TICK_MS))
            .unwrap();
        timer0.listen();
        TIMER0.borrow_ref_mut(cs).replace(timer0);
    });
    info!("timer initialized.");

    let board = Board::init(peripherals);
    critical_section::with(|cs| {
        KEYPAD
            .borrow_ref_mut(cs)
            .replace(KeypadSampler::new(board.keypad));
    });
    info!("keypad initialized.");

    let cfg = KeypadConfig::default();
    let clock = BootClock::new();
    let mut delay = Delay::new();
    let mut lcd = ConsoleDisplay::new();
    let mut screen = ButtonScreen::new(cfg);

    let Ok(()) = screen.draw_header(&mut lcd);
    lcd.flush();
    info!("screen ready.");

    let mut timeouts: u32 = 0;
    loop {
        match CONVERSION.read(&clock, cfg.timeout_ms) {
            Ok(state) => {
                timeouts = 0;
                let Ok(changed) = screen.show(&mut lcd, state);
                if changed {
                    lcd.flush();
                }
            }
            Err(e) => {
                warn!("keypad: {}", e);
                CONVERSION.cancel();
                timeouts += 1;
                if timeouts % TIMEOUT_REPORT_EVERY == 0 {
                    warn!(
                        "keypad: {} timeouts in a row, {} converter errors",
                        timeouts,
                        sampler_failures()
                    );
                }
            }
        }

        delay.delay_ms(cfg.poll_interval_ms);
    }
}
