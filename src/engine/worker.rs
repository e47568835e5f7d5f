// Resize engine worker process management
// One request in on stdin, one JSON report out on stdout - no streaming

use crate::error::JobError;
use crate::models::{JobReport, JobRequest};
use log::{debug, warn};
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

#[cfg(windows)]
use std::os::windows::process::CommandExt;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x08000000;

fn engine_binary_name() -> String {
    format!("rescale-engine{}", std::env::consts::EXE_SUFFIX)
}

/// Locate the engine executable: next to our own binary in packaged builds,
/// walking up a few directories for dev layouts.
pub fn get_engine_path() -> PathBuf {
    let name = engine_binary_name();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let packaged = exe_dir.join(&name);
            if packaged.exists() {
                return packaged;
            }

            let mut current = exe_dir;
            for _ in 0..3 {
                if let Some(parent) = current.parent() {
                    let dev_engine = parent.join("engine").join(&name);
                    if dev_engine.exists() {
                        debug!("Found resize engine at: {:?}", dev_engine);
                        return dev_engine;
                    }
                    current = parent;
                }
            }
        }
    }

    let cwd_engine = std::env::current_dir().unwrap_or_default().join(&name);
    debug!("Fallback to current dir engine: {:?}", cwd_engine);
    cwd_engine
}

/// Decodes the engine's string payload into a report. Kept separate from the
/// process plumbing so the wire shape is testable on its own.
pub(crate) fn decode_report(payload: &str) -> Result<JobReport, JobError> {
    serde_json::from_str(payload.trim()).map_err(|e| JobError::MalformedResponse(e.to_string()))
}

/// Drives one request/response exchange with an already-configured engine
/// command: descriptor in on stdin, payload out on stdout. stderr is drained
/// concurrently so a chatty engine cannot fill the pipe and stall the report
/// read; whatever it wrote is folded into the failure message on a non-zero
/// exit.
async fn exchange_with(mut cmd: Command, descriptor: &str) -> Result<String, JobError> {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    #[cfg(windows)]
    cmd.creation_flags(CREATE_NO_WINDOW);

    let mut child = cmd
        .spawn()
        .map_err(|e| JobError::EngineUnavailable(format!("failed to spawn engine: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(descriptor.as_bytes())
            .await
            .map_err(|e| JobError::EngineUnavailable(format!("failed to send job: {}", e)))?;
        stdin
            .shutdown()
            .await
            .map_err(|e| JobError::EngineUnavailable(format!("failed to close stdin: {}", e)))?;
    }

    let stderr_drain = child.stderr.take().map(|mut stderr| {
        tokio::spawn(async move {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf).await;
            buf
        })
    });

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| JobError::EngineUnavailable("failed to capture stdout".to_string()))?;

    let mut payload = String::new();
    stdout
        .read_to_string(&mut payload)
        .await
        .map_err(|e| JobError::EngineUnavailable(format!("failed to read report: {}", e)))?;

    let status = child
        .wait()
        .await
        .map_err(|e| JobError::EngineUnavailable(format!("failed to wait for engine: {}", e)))?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        let detail = match stderr_drain {
            Some(handle) => handle.await.unwrap_or_default(),
            None => String::new(),
        };
        let detail = detail.trim();

        warn!("Resize engine exited with code {}", code);
        return Err(JobError::EngineUnavailable(if detail.is_empty() {
            format!("engine exited with code {}", code)
        } else {
            format!("engine exited with code {}: {}", code, detail)
        }));
    }

    Ok(payload)
}

/// Runs the engine once for the given job. Awaited unconditionally to
/// completion - no retry, no timeout, no cancellation.
pub async fn run_engine(job: &JobRequest) -> Result<JobReport, JobError> {
    let engine_path = get_engine_path();

    if !engine_path.exists() {
        return Err(JobError::EngineUnavailable(format!(
            "engine not found at {:?}",
            engine_path
        )));
    }

    debug!("Dispatching resize job to engine: {:?}", engine_path);

    let descriptor = serde_json::to_string(job)
        .map_err(|e| JobError::EngineUnavailable(format!("failed to serialize job: {}", e)))?;

    let payload = exchange_with(Command::new(&engine_path), &descriptor).await?;

    decode_report(&payload)
}
