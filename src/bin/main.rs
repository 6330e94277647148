#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_hal::{
    clock::CpuClock,
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    i2c::master::I2c,
    spi::master::Spi,
    time::Rate,
    timer::timg::TimerGroup,
};
use log::{LevelFilter, info};
use static_cell::StaticCell;

use armilla_core::{
    apps::{ClockApp, FlashlightApp, LauncherApp},
    manager::Manager,
};
use armilla_hal_esp32s3::{
    board::WatchBoard,
    input::ButtonPin,
    platform::{
        backlight::SteppedBacklight, battery::ChargeSense, display::St7789Display,
        touch::Cst816Touch, vibrator::Vibrator,
    },
};

const DISPLAY_SPI_HZ: u32 = 8_000_000;
const TOUCH_I2C_HZ: u32 = 400_000;
const VIBRATOR_PULSE_MS: u32 = 60;
// The bounded low-power wait between dispatcher iterations. Tick catch-up
// in the manager tolerates it being stretched.
const POLL_INTERVAL_MS: u64 = 20;

static CLOCK_APP: StaticCell<ClockApp> = StaticCell::new();
static FLASHLIGHT_APP: StaticCell<FlashlightApp> = StaticCell::new();
static LAUNCHER_APP: StaticCell<LauncherApp> = StaticCell::new();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: armilla starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Display wiring: SCK=GPIO13 MOSI=GPIO14 CS=GPIO15 DC=GPIO2 RST=GPIO9
    let dc = Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default());
    let rst = Output::new(peripherals.GPIO9, Level::High, OutputConfig::default());
    let cs = Output::new(peripherals.GPIO15, Level::High, OutputConfig::default());

    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(DISPLAY_SPI_HZ))
        // ST7789 uses CPOL=0, CPHA=0.
        .with_mode(esp_hal::spi::Mode::_0);
    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO13)
        .with_mosi(peripherals.GPIO14);

    let display = St7789Display::new(spi, dc, rst, cs);

    // Backlight rails: LOW=GPIO16 MID=GPIO17 HIGH=GPIO18, active low.
    let backlight = SteppedBacklight::new(
        Output::new(peripherals.GPIO16, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO17, Level::High, OutputConfig::default()),
        Output::new(peripherals.GPIO18, Level::High, OutputConfig::default()),
    );

    // Touch controller wiring: SDA=GPIO6 SCL=GPIO7
    let i2c_config =
        esp_hal::i2c::master::Config::default().with_frequency(Rate::from_hz(TOUCH_I2C_HZ));
    let i2c = I2c::new(peripherals.I2C0, i2c_config)
        .unwrap()
        .with_sda(peripherals.GPIO6)
        .with_scl(peripherals.GPIO7);
    let touch = Cst816Touch::new(i2c);

    // Charge indicator: GPIO12, low while the charger is attached.
    let charge = ChargeSense::new(Input::new(
        peripherals.GPIO12,
        InputConfig::default().with_pull(Pull::Up),
    ));

    // Vibration motor enable: GPIO8, active low.
    let vibrator = Vibrator::new(
        Output::new(peripherals.GPIO8, Level::High, OutputConfig::default()),
        VIBRATOR_PULSE_MS,
    );

    // Side button: GPIO10, high while pressed.
    let button = ButtonPin::new(
        Input::new(peripherals.GPIO10, InputConfig::default().with_pull(Pull::Down)),
        false,
    );

    let board = WatchBoard::new(display, backlight, touch, charge, vibrator);

    info!("Display pins: SCK=GPIO13 MOSI=GPIO14 CS=GPIO15 DC=GPIO2 RST=GPIO9");
    info!("Touch pins: SDA=GPIO6 SCL=GPIO7");
    info!("Button=GPIO10 Charge=GPIO12 Motor=GPIO8 Backlight=GPIO16/17/18");

    let launcher = LAUNCHER_APP.init(LauncherApp::new());
    let mut manager = Manager::new(board, button, launcher).unwrap();

    manager.register(CLOCK_APP.init(ClockApp::new()));
    manager.register(FLASHLIGHT_APP.init(FlashlightApp::new()));

    if let Err(err) = manager.start() {
        esp_println::println!("boot: manager start failed");
        info!("manager start failed: {:?}", err);
        loop {
            Timer::after_secs(1).await;
        }
    }

    loop {
        if let Err(err) = manager.poll() {
            esp_println::println!("fatal: dispatch failed");
            info!("dispatch failed: {:?}", err);
            break;
        }
        Timer::after_millis(POLL_INTERVAL_MS).await;
    }

    // No supervision: a failed poll step halts here, visible on the console.
    loop {
        Timer::after_secs(1).await;
    }
}

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();
