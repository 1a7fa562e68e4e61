// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Uniform handling of external steps.
//!
//! Every external command in a pipeline is either fatal (abort the
//! operation) or a warning (log and continue). The call site decides.

use crate::EngineError;
use condo_adapters::ProcessError;
use std::future::Future;

/// How a failed step affects the surrounding operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Warning,
}

/// Run one step.
///
/// Returns `Ok(None)` when a [`Severity::Warning`] step failed.
pub async fn run_step<T, F>(
    description: &str,
    severity: Severity,
    step: F,
) -> Result<Option<T>, EngineError>
where
    F: Future<Output = Result<T, ProcessError>>,
{
    match severity {
        Severity::Fatal => fatal(description, step).await.map(Some),
        Severity::Warning => Ok(warning(description, step).await),
    }
}

/// Run a step whose failure aborts the operation.
pub(crate) async fn fatal<T, F>(description: &str, step: F) -> Result<T, EngineError>
where
    F: Future<Output = Result<T, ProcessError>>,
{
    tracing::debug!(step = description, "running step");
    step.await.map_err(|source| {
        tracing::error!(step = description, error = %source, "step failed");
        EngineError::Step { step: description.to_string(), source }
    })
}

/// Run a step whose failure is only logged.
pub(crate) async fn warning<T, F>(description: &str, step: F) -> Option<T>
where
    F: Future<Output = Result<T, ProcessError>>,
{
    tracing::debug!(step = description, "running step");
    match step.await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(step = description, error = %e, "step failed, continuing");
            None
        }
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
