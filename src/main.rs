use std::env;
use std::path::PathBuf;

use crossterm::event::EventStream;
use futures::StreamExt;

mod config;
mod input;
mod launch;
mod render;
mod session;
mod theme;

use config::ConfigEngine;
use launch::platform_spawner;
use render::Renderer;
use session::Session;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Evaluate ~/.config/wren/init.rhai before touching the terminal
    let mut config = ConfigEngine::new();
    if let Err(e) = config.load_default() {
        eprintln!("[config] {}", e);
    }

    let mut session = Session::new(config.settings(), platform_spawner());

    // A path on the command line opens as a second tab after the untitled one
    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        if let Err(e) = session.open_file(PathBuf::from(&args[1])) {
            session.set_message(format!("Error: {}", e));
        }
    }

    Renderer::setup()?;
    let mut renderer = Renderer::new()?;

    session.adjust_scroll(renderer.text_height());
    renderer.render(&session)?;

    // Everything runs on this one task; each event is handled to completion
    // before the next is read.
    let mut events = EventStream::new();
    while session.running {
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                input::handle_event(&mut session, event);
                session.adjust_scroll(renderer.text_height());
                renderer.render(&session)?;
            }
        }
    }

    Renderer::teardown()?;

    Ok(())
}
