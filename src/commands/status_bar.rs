//! Status bar command for the macOS menu bar.

use anyhow::Result;

use crate::commands::usage::UsageSnapshot;
use crate::models::Granularity;


/// Run the status bar app.
pub fn run(granularity: Granularity) -> Result<()> {
    #[cfg(not(target_os = "macos"))]
    {
        let _ = granularity;
        println!("\x1b[31mError: status-bar is only available on macOS\x1b[0m");
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        run_macos_status_bar(granularity)
    }
}


#[cfg(target_os = "macos")]
fn run_macos_status_bar(granularity: Granularity) -> Result<()> {
    use tray_icon::{
        menu::{Menu, MenuEvent, MenuItem},
        TrayIconBuilder,
    };

    use crate::commands::usage::{refresh, DashboardState};

    println!("\x1b[32mLaunching status bar app...\x1b[0m");
    println!(
        "\x1b[2mThe menu bar shows total cost for the {}.\x1b[0m",
        granularity.window_label()
    );
    println!("\x1b[2mPress Ctrl+C or select 'Quit' from the menu to stop.\x1b[0m\n");

    let mut state = DashboardState::default();
    state.apply(refresh(granularity));

    let title = format_title(state.snapshot());

    // Create menu
    let menu = Menu::new();
    let refresh_item = MenuItem::new("Refresh", true, None);
    let quit_item = MenuItem::new("Quit", true, None);

    menu.append(&refresh_item)?;
    menu.append(&quit_item)?;

    // Create tray icon
    let tray = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_title(&title)
        .build()?;

    println!("Status bar active. Showing: {}", title);

    // Event loop
    let menu_channel = MenuEvent::receiver();

    loop {
        if let Ok(event) = menu_channel.try_recv() {
            if event.id == quit_item.id() {
                println!("\nQuitting status bar...");
                break;
            } else if event.id == refresh_item.id() {
                state.apply(refresh(granularity));
                let new_title = format_title(state.snapshot());
                tray.set_title(Some(&new_title));

                match state.last_error() {
                    Some(message) => eprintln!("Refresh failed: {message}"),
                    None => println!("Refreshed: {new_title}"),
                }
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(100));
    }

    Ok(())
}


/// Format the menu bar title from the current snapshot.
fn format_title(snapshot: Option<&UsageSnapshot>) -> String {
    match snapshot {
        Some(s) => {
            let cost: f64 = s.entries.iter().map(|e| e.total_cost).sum();
            format!("CC ${:.2}", cost)
        }
        None => "CC $-.--".to_string(),
    }
}
