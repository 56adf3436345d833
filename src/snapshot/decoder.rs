// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Staged decoder for the composite query output.

use std::sync::LazyLock;

use regex::Regex;

use super::{CurrentApp, DecodedSnapshot, UNKNOWN_WAKE_LOCK_SIZE, extract_audio};

/// Matches `mCurrentFocus=Window{<id> <user> <package>/<activity>}` as well
/// as a bare `<package>/<activity>`.
static WINDOW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:.*Window\{\S+ \S+ )?(?P<package>[^\s/{}=]+)(?:/(?P<activity>[^\s{}=]+))?\}?\s*$",
    )
    .expect("valid window pattern")
});

/// Decoding stages, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    ScreenOn,
    Awake,
    WakeLock,
    CurrentApp,
    Audio,
}

/// Outcome of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next(Stage),
    Stop,
}

struct Decoder<'a> {
    output: &'a str,
    lines: Vec<&'a str>,
    snapshot: DecodedSnapshot,
}

impl<'a> Decoder<'a> {
    fn new(output: &'a str) -> Self {
        Self {
            output,
            lines: Vec::new(),
            snapshot: DecodedSnapshot::new(),
        }
    }

    fn run(mut self) -> DecodedSnapshot {
        let mut stage = Stage::ScreenOn;
        while let Step::Next(next) = self.step(stage) {
            stage = next;
        }
        self.snapshot
    }

    fn step(&mut self, stage: Stage) -> Step {
        match stage {
            Stage::ScreenOn => self.screen_on(),
            Stage::Awake => self.awake(),
            Stage::WakeLock => self.wake_lock(),
            Stage::CurrentApp => self.current_app(),
            Stage::Audio => self.audio(),
        }
    }

    fn screen_on(&mut self) -> Step {
        let mut chars = self.output.chars();
        self.snapshot.screen_on = Some(chars.next() == Some('1'));
        if chars.next().is_none() {
            return Step::Stop;
        }
        Step::Next(Stage::Awake)
    }

    fn awake(&mut self) -> Step {
        self.snapshot.awake = Some(self.output.chars().nth(1) == Some('1'));
        self.lines = self.output.trim().lines().collect();
        Step::Next(Stage::WakeLock)
    }

    fn wake_lock(&mut self) -> Step {
        let first = self.lines.first().copied().unwrap_or_default();
        // Skip the screen and awake markers.
        let line = first.char_indices().nth(2).map_or("", |(i, _)| &first[i..]);
        if line.chars().count() < 3 {
            self.snapshot.wake_lock_size = Some(UNKNOWN_WAKE_LOCK_SIZE);
            return Step::Stop;
        }

        let count = line
            .split_once('=')
            .and_then(|(_, count)| count.trim().parse::<i32>().ok());
        match count {
            Some(count) => {
                self.snapshot.wake_lock_size = Some(count);
                Step::Next(Stage::CurrentApp)
            }
            None => {
                tracing::debug!(line = %line, "Unreadable wake lock count");
                Step::Stop
            }
        }
    }

    fn current_app(&mut self) -> Step {
        let Some(line) = self.lines.get(1).copied() else {
            return Step::Stop;
        };

        self.snapshot.current_app = parse_window(line);
        if self.snapshot.current_app.is_none() {
            tracing::warn!(reply = %line, "Couldn't get current app");
        }
        Step::Next(Stage::Audio)
    }

    fn audio(&mut self) -> Step {
        if self.lines.len() < 3 {
            return Step::Stop;
        }
        let dump = self.lines[2..].join("\n");
        self.snapshot.apply_audio(extract_audio(&dump));
        Step::Stop
    }
}

/// Parses a focused window descriptor.
fn parse_window(line: &str) -> Option<CurrentApp> {
    let caps = WINDOW_PATTERN.captures(line.trim())?;
    Some(CurrentApp {
        package: caps.name("package")?.as_str().to_string(),
        activity: caps.name("activity").map(|m| m.as_str().to_string()),
    })
}

/// Decodes the output of a composite state query.
///
/// `None` stands for a transport failure and yields a snapshot with every
/// field unset. Empty output means the screen probe failed and yields
/// `screen_on = false`, `awake = false` and an unknown wake lock count.
/// Any other input is decoded stage by stage until the output runs out.
/// This function never fails.
///
/// # Examples
///
/// ```
/// use droidtv_lib::snapshot::decode;
///
/// assert!(decode(None).is_unknown());
///
/// let off = decode(Some(""));
/// assert_eq!(off.screen_on, Some(false));
/// assert_eq!(off.wake_lock_size, Some(-1));
///
/// let short = decode(Some("1"));
/// assert_eq!(short.screen_on, Some(true));
/// assert!(short.awake.is_none());
/// ```
#[must_use]
pub fn decode(output: Option<&str>) -> DecodedSnapshot {
    match output {
        None => DecodedSnapshot::new(),
        Some("") => DecodedSnapshot {
            screen_on: Some(false),
            awake: Some(false),
            wake_lock_size: Some(UNKNOWN_WAKE_LOCK_SIZE),
            ..DecodedSnapshot::default()
        },
        Some(output) => Decoder::new(output).run(),
    }
}
