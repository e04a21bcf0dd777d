//! Tau Core headless driver
//!
//! Replays a JSON session script through the judgement core and writes each
//! produced event as one JSON line on stdout.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use tau_core::Settings;
use tau_core::sim::{
    GameEvent, HitObject, JudgeState, Session, SessionConfig, TickInput, pointer_for_angle, tick,
};

#[derive(Parser, Debug)]
#[command(name = "tau-core", about = "Run a session script through the tau judgement core")]
struct Args {
    /// Session script (JSON)
    script: PathBuf,

    /// Settings file (JSON); defaults are used when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Aim the cursor at the next unjudged object on frames without pointer input
    #[arg(long)]
    autoplay: bool,
}

/// Recorded session: everything the host would deliver
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    config: SessionConfig,
    #[serde(default)]
    settings: Option<Settings>,
    objects: Vec<HitObject>,
    frames: Vec<TickInput>,
}

/// One output line
#[derive(Debug, Serialize)]
struct EventLine<'a> {
    frame: usize,
    time: f64,
    event: &'a GameEvent,
}

fn load_settings(args: &Args, script: &mut Script) -> Result<Settings> {
    if let Some(path) = &args.settings {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        return Ok(Settings::from_json(&json)?);
    }
    Ok(script.settings.take().unwrap_or_default())
}

/// Pointer aimed at the first object still waiting for a judgement
fn autoplay_pointer(session: &Session) -> Option<glam::Vec2> {
    let pipeline = &session.pipeline;
    let next = (0..pipeline.objects().len())
        .find(|&i| !matches!(pipeline.state_of(i), Some(JudgeState::Judged(_))))?;
    let object = &pipeline.objects()[next];
    Some(pointer_for_angle(
        session,
        object.target_angle,
        session.cursor.ring_radius,
    ))
}

fn run(args: Args) -> Result<()> {
    let json = fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let mut script: Script = serde_json::from_str(&json).context("parsing session script")?;
    let settings = load_settings(&args, &mut script)?;

    let frames = std::mem::take(&mut script.frames);
    let mut session = Session::new(script.config, settings, script.objects)
        .context("starting session")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut judged = 0usize;
    let mut hits = 0usize;

    for (frame, mut input) in frames.into_iter().enumerate() {
        if args.autoplay && input.pointer.is_none() {
            input.pointer = autoplay_pointer(&session);
        }

        let events = tick(&mut session, &input)
            .with_context(|| format!("frame {} at {}ms", frame, input.time))?;

        for event in &events {
            if let GameEvent::Judgement(result) = event {
                judged += 1;
                if result.outcome.is_hit() {
                    hits += 1;
                }
            }
            let line = EventLine {
                frame,
                time: input.time,
                event,
            };
            serde_json::to_writer(&mut out, &line)?;
            writeln!(out)?;
        }
    }

    session.end();
    out.flush()?;
    log::info!("{} of {} judged objects hit", hits, judged);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    run(Args::parse())
}
