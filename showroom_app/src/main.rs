//! Showroom demo application
//!
//! Headless walkthrough of the configurator core: loads a model
//! manifest, classifies its parts, applies a few style changes, and
//! prints the shareable state. Rendering is left to a graphics frontend.

use showroom_engine::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| "showroom.toml".to_string());
    let config = match ShowroomConfig::load_from_file(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("could not load {config_path:?} ({err}), using defaults");
            ShowroomConfig::default()
        }
    };

    let mut session = ConfiguratorSession::new();
    let env_file = session.set_environment(&config.default_environment);
    log::info!("environment map: {env_file}");

    let manifest_path = config.model_path(&config.default_model);
    log::info!("loading model manifest {}", manifest_path.display());

    let ticket = session.begin_load(&config.default_model);
    let graph = load_model(&manifest_path)?;
    session.complete_load(ticket, graph)?;

    let car = session.current().ok_or("no model loaded")?;
    log::info!("model {:?} loaded, {} part(s) classified", car.name, car.parts.total());
    for (category, nodes) in car.parts.iter() {
        if !nodes.is_empty() {
            println!("{category:>10}: {} part(s)", nodes.len());
        }
    }

    // A quick restyle pass, the way UI callbacks would drive it.
    session.set_body_preset("blue_metallic");
    session.set_rims_style(RimStyle::Carbon);
    session.set_glass(Color::from_hex(0x3fa7ef), 0.4, 0.05);
    session.set_headlights(2.2);

    println!("\nshare this design:");
    println!("?{}", session.share_query_string());

    Ok(())
}
