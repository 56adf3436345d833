// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ADB shell channel backed by the system `adb` client.

use std::time::Duration;

use tokio::process::Command;
use tokio::sync::Mutex;

use crate::error::ProtocolError;
use crate::protocol::CommandChannel;

// ============================================================================
// AdbConfig - Configuration for network ADB devices
// ============================================================================

/// Configuration for an Android device reachable through network ADB.
///
/// The device must already be known to the local adb server (for example
/// after `adb connect`); this crate does not manage the ADB session.
///
/// # Examples
///
/// ```
/// use droidtv_lib::protocol::AdbConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = AdbConfig::new("192.168.1.42");
/// assert_eq!(config.serial(), "192.168.1.42:5555");
///
/// // With all options
/// let config = AdbConfig::new("192.168.1.42")
///     .with_port(5556)
///     .with_adb_path("/opt/platform-tools/adb")
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct AdbConfig {
    host: String,
    port: u16,
    adb_path: String,
    timeout: Duration,
}

impl AdbConfig {
    /// Default network ADB port.
    pub const DEFAULT_PORT: u16 = 5555;
    /// Default adb client executable, resolved through `PATH`.
    pub const DEFAULT_ADB_PATH: &'static str = "adb";
    /// Default command timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the device
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            adb_path: Self::DEFAULT_ADB_PATH.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the adb client executable.
    #[must_use]
    pub fn with_adb_path(mut self, path: impl Into<String>) -> Self {
        self.adb_path = path.into();
        self
    }

    /// Sets the per-command timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the adb client executable.
    #[must_use]
    pub fn adb_path(&self) -> &str {
        &self.adb_path
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the adb device serial (`host:port`).
    #[must_use]
    pub fn serial(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Creates an `AdbShell` from this configuration.
    #[must_use]
    pub fn into_channel(self) -> AdbShell {
        AdbShell {
            config: self,
            lock: Mutex::new(()),
        }
    }
}

// ============================================================================
// AdbShell - Channel implementation
// ============================================================================

/// Channel that runs `adb -s <serial> shell <command>`.
///
/// Commands are serialized: a second caller waits until the running command
/// has completed or timed out.
#[derive(Debug)]
pub struct AdbShell {
    config: AdbConfig,
    lock: Mutex<()>,
}

impl AdbShell {
    /// Creates a channel for the specified host with default settings.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        AdbConfig::new(host).into_channel()
    }

    /// Returns the channel configuration.
    #[must_use]
    pub fn config(&self) -> &AdbConfig {
        &self.config
    }

    fn build_command(&self, command: &str) -> Command {
        let mut cmd = Command::new(self.config.adb_path());
        cmd.arg("-s")
            .arg(self.config.serial())
            .arg("shell")
            .arg(command)
            .kill_on_drop(true);
        cmd
    }
}

/// Returns the adb client diagnostic, if stderr carries one.
///
/// A failing remote command only changes the exit status, while adb itself
/// reports unreachable devices as `error: ...` lines.
fn adb_failure(stderr: &str) -> Option<&str> {
    stderr
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("error:"))
}

impl CommandChannel for AdbShell {
    async fn send_raw(&self, command: &str) -> Result<String, ProtocolError> {
        let _guard = self.lock.lock().await;

        tracing::debug!(serial = %self.config.serial(), command = %command, "Sending ADB shell command");

        let timeout = self.config.timeout();
        let output = tokio::time::timeout(timeout, self.build_command(command).output())
            .await
            .map_err(|_| {
                ProtocolError::Timeout(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX))
            })??;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if let Some(message) = adb_failure(&stderr) {
            return Err(ProtocolError::ConnectionFailed(message.to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        tracing::debug!(
            status = ?output.status.code(),
            bytes = stdout.len(),
            "Received ADB shell output"
        );

        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adb_config_default_values() {
        let config = AdbConfig::new("192.168.1.42");
        assert_eq!(config.host(), "192.168.1.42");
        assert_eq!(config.port(), 5555);
        assert_eq!(config.adb_path(), "adb");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn adb_config_builder_chain() {
        let config = AdbConfig::new("tv.local")
            .with_port(5556)
            .with_adb_path("/usr/local/bin/adb")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(config.serial(), "tv.local:5556");
        assert_eq!(config.adb_path(), "/usr/local/bin/adb");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn into_channel_keeps_config() {
        let channel = AdbConfig::new("192.168.1.42").with_port(6000).into_channel();
        assert_eq!(channel.config().serial(), "192.168.1.42:6000");
    }

    #[test]
    fn build_command_targets_serial() {
        let channel = AdbShell::new("192.168.1.42");
        let cmd = channel.build_command("getprop");
        let args: Vec<_> = cmd
            .as_std()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(args, ["-s", "192.168.1.42:5555", "shell", "getprop"]);
    }

    #[test]
    fn adb_failure_detects_client_errors() {
        assert_eq!(
            adb_failure("error: device '192.168.1.42:5555' not found\n"),
            Some("error: device '192.168.1.42:5555' not found")
        );
        assert_eq!(adb_failure(""), None);
        assert_eq!(adb_failure("grep: warning: stray \\\n"), None);
    }

    #[tokio::test]
    async fn missing_adb_binary_is_a_spawn_error() {
        let channel = AdbConfig::new("192.168.1.42")
            .with_adb_path("/nonexistent/droidtv-adb")
            .into_channel();
        let result = channel.send_raw("getprop").await;
        assert!(matches!(result, Err(ProtocolError::Spawn(_))));
    }

    #[cfg(unix)]
    mod fake_adb {
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        use super::*;

        /// Writes an executable stand-in for the adb client into a fresh directory.
        fn install(name: &str, body: &str) -> PathBuf {
            let dir = std::env::temp_dir().join(format!("droidtv-{name}-{}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            let script = dir.join("adb");
            std::fs::write(&script, format!("#!/bin/sh\n{body}\n")).unwrap();
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
            script
        }

        #[tokio::test]
        async fn commands_run_one_at_a_time() {
            let script = install(
                "serial",
                r#"log="$(dirname "$0")/calls.log"
echo start >> "$log"
sleep 0.2
echo end >> "$log"
printf '%s' "$4""#,
            );
            let log = script.with_file_name("calls.log");
            let _ = std::fs::remove_file(&log);

            let channel = AdbConfig::new("192.168.1.42")
                .with_adb_path(script.to_string_lossy())
                .into_channel();
            let (first, second) =
                tokio::join!(channel.send_raw("getprop"), channel.send_raw("dumpsys audio"));

            assert_eq!(first.unwrap(), "getprop");
            assert_eq!(second.unwrap(), "dumpsys audio");
            assert_eq!(
                std::fs::read_to_string(&log).unwrap(),
                "start\nend\nstart\nend\n"
            );
        }

        #[tokio::test]
        async fn slow_command_times_out() {
            let script = install("timeout", "sleep 5");
            let channel = AdbConfig::new("192.168.1.42")
                .with_adb_path(script.to_string_lossy())
                .with_timeout(Duration::from_millis(50))
                .into_channel();

            let result = channel.send_raw("getprop").await;

            assert!(matches!(result, Err(ProtocolError::Timeout(50))));
        }

        #[tokio::test]
        async fn client_error_is_a_connection_failure() {
            let script = install(
                "offline",
                "echo \"error: device '$2' not found\" >&2\nexit 1",
            );
            let channel = AdbConfig::new("192.168.1.42")
                .with_adb_path(script.to_string_lossy())
                .into_channel();

            let result = channel.send_raw("getprop").await;

            assert!(matches!(
                result,
                Err(ProtocolError::ConnectionFailed(ref message))
                    if message == "error: device '192.168.1.42:5555' not found"
            ));
        }
    }
}
