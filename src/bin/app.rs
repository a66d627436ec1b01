#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Timer};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{
    clock::CpuClock,
    gpio::{Level, Output, OutputConfig},
    timer::timg::TimerGroup,
    uart::Uart,
};
use esp_println::println;
use log::LevelFilter;

use esp_projector_panel::config::{self, HTTP_PORT};
use esp_projector_panel::controllers::init_panel_controller;
use esp_projector_panel::infrastructure::drivers::{
    EspStation, SoftwareReset, init_network_stack, projector_uart_config,
};
use esp_projector_panel::infrastructure::tasks::{
    heartbeat_task, http_server_task, network_runner_task,
};
use panel_core::bringup::bring_up;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = config::load().expect("Invalid build configuration");
    esp_println::logger::init_logger(if config.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    println!("=================================");
    println!("  Projector Panel {}", config::BUILD_VERSION);
    println!("=================================");
    config.log_summary();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory for the radio (64 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let led = Output::new(
        esp_projector_panel::led_gpio!(peripherals),
        Level::Low,
        OutputConfig::default(),
    );

    // RS-232 link to the projector
    let projector_uart = Uart::new(peripherals.UART2, projector_uart_config())
        .expect("Invalid projector UART config")
        .with_tx(peripherals.GPIO17)
        .with_rx(peripherals.GPIO16)
        .into_async();

    // Initialize network stack and join the configured network.
    // The device restarts if no address is obtained.
    let (stack, runner, controller) = init_network_stack(peripherals.WIFI);
    spawner.spawn(network_runner_task(runner)).ok();

    let mut station = EspStation::new(controller, stack);
    if let Err(e) = bring_up(&mut station, &mut Delay, &mut SoftwareReset, &config.wifi).await {
        panic!("network bring-up failed: {:?}", e);
    }
    if let Some(ip) = stack.config_v4() {
        log::info!("Listening on http://{}:{}/", ip.address.address(), HTTP_PORT);
    }

    // Spawn network-dependent tasks
    let controller = init_panel_controller(led, projector_uart, &config);
    spawner.spawn(http_server_task(stack, controller)).ok();
    spawner.spawn(heartbeat_task(config.debug)).ok();

    // `station` owns the radio controller and has to outlive the network
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
