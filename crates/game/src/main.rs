//! Drone Pilot: headless run of the three-mission trial with a scripted pilot.

use anyhow::Result;

use game::{Autopilot, GameConfig, GameEvent, HostEvent, Simulation};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                 Drone Pilot: Systems Thinker Trial               ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                                       ║");
    println!("║    W/S        - Forward/back   │  A/D        - Strafe            ║");
    println!("║    Space      - Ascend         │  Shift      - Descend           ║");
    println!("║    Q/E        - Yaw            │  R          - Restart mission   ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  MISSIONS:                                                       ║");
    println!("║    M1 - Ring course  │  M2 - Noisy maze (60s)  │  M3 - Wind goal  ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");

    let config = GameConfig::load();
    let persona = config.persona()?;
    log::info!("Starting Drone Pilot as {} (seed {:#x})", persona, config.seed);

    let audio = audio::open_or_silent(&config.audio.cue_settings());
    let mut sim = Simulation::new(config.seed, config.timing, audio);
    sim.handle_event(HostEvent::SelectPersona(persona));
    if let Some(drag) = config.drag {
        sim.handle_event(HostEvent::SetDrag(drag));
    }
    if let Some(tilt_gain) = config.tilt_gain {
        sim.handle_event(HostEvent::SetTiltGain(tilt_gain));
    }

    let dt = config.frame_seconds();
    let report_every = config.frame_rate.round().max(1.0) as u64;
    let mut pilot = Autopilot::new();
    let mut finished = false;

    for frame in 0..config.max_frames {
        for event in pilot.steer(sim.drone(), sim.current_target()) {
            sim.handle_event(event);
        }

        for event in sim.frame(dt) {
            log::info!("{:?}", event);
            if event == GameEvent::GameEnded {
                finished = true;
            }
        }
        if finished {
            break;
        }

        if frame % report_every == 0 {
            let drone = sim.drone();
            log::info!(
                "t={:.1}s pos={:.2} speed={:.3}\n{}",
                sim.time().elapsed_seconds(),
                drone.position(),
                drone.speed(),
                sim.hud_text()
            );
        }
    }

    if finished {
        log::info!("All missions complete after {:.1}s", sim.time().elapsed_seconds());
    } else {
        log::warn!(
            "Stopped after {} frames on mission {}",
            config.max_frames,
            sim.mission().number()
        );
    }
    println!("{}", sim.hud_text());
    Ok(())
}
