// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secret material: the workspace ssh key pair, the sealed-secrets
//! controller key archive and the flux deploy secret.

use crate::step::fatal;
use crate::{ClusterContext, EngineError};
use condo_adapters::{ProcessRunner, ToolLocator};
use condo_core::Workspace;
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::RsaPrivateKey;
use std::path::Path;

pub const DEFAULT_KEY_BITS: usize = 4096;

const SEALED_SECRETS_NAMESPACE: &str = "kube-system";
const SEALED_SECRETS_SELECTOR: &str = "sealedsecrets.bitnami.com/sealed-secrets-key";
const FLUX_SECRET: &str = "flux-git-deploy";
const FLUX_NAMESPACE: &str = "weave";

/// Outcome of [`ensure_key_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPairStatus {
    /// Both files were already present
    Existing,
    /// Neither file existed
    Generated,
    /// Only one file existed; both were replaced
    Regenerated,
}

/// Make sure `.ssh/identity` and `.ssh/identity.pub` both exist.
///
/// A lone private or public key cannot be completed, so a partial pair is
/// replaced by a fresh one.
pub fn ensure_key_pair(workspace: &Workspace, bits: usize) -> Result<KeyPairStatus, EngineError> {
    let private_path = workspace.private_key();
    let public_path = workspace.public_key();

    let status = match (private_path.exists(), public_path.exists()) {
        (true, true) => {
            tracing::info!(path = %private_path.display(), "key pair exists, skipping");
            return Ok(KeyPairStatus::Existing);
        }
        (false, false) => KeyPairStatus::Generated,
        (has_private, _) => {
            let present = if has_private { &private_path } else { &public_path };
            tracing::warn!(path = %present.display(), "incomplete key pair, regenerating both keys");
            KeyPairStatus::Regenerated
        }
    };

    let ssh_dir = workspace.ssh_dir();
    std::fs::create_dir_all(&ssh_dir).map_err(EngineError::io("create", &ssh_dir))?;

    tracing::info!(bits, "generating ssh key pair");
    let (private_pem, public_line) = generate_key_pair(bits)?;
    write_private(&private_path, private_pem.as_bytes())?;
    write_private(&public_path, public_line.as_bytes())?;

    Ok(status)
}

/// PKCS#1 PEM private key and OpenSSH authorized-key line.
fn generate_key_pair(bits: usize) -> Result<(String, String), EngineError> {
    let mut rng = rand::rngs::OsRng;
    let private = RsaPrivateKey::new(&mut rng, bits).map_err(|e| EngineError::KeyGen(e.to_string()))?;
    let pem = private.to_pkcs1_pem(LineEnding::LF).map_err(|e| EngineError::KeyGen(e.to_string()))?;

    let public = ssh_key::public::RsaPublicKey::try_from(private.to_public_key())
        .map_err(|e| EngineError::KeyGen(e.to_string()))?;
    let openssh = ssh_key::PublicKey::new(ssh_key::public::KeyData::Rsa(public), "")
        .to_openssh()
        .map_err(|e| EngineError::KeyGen(e.to_string()))?;

    Ok((pem.as_str().to_owned(), format!("{}\n", openssh.trim_end())))
}

/// Write `contents` to `path` with mode 0600, replacing any existing file.
fn write_private(path: &Path, contents: &[u8]) -> Result<(), EngineError> {
    std::fs::write(path, contents).map_err(EngineError::io("write", path))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .map_err(EngineError::io("set permissions on", path))?;
    }
    Ok(())
}

/// Restore the sealed-secrets controller key from the archive, then refresh
/// the archive from the cluster.
///
/// Restoring keeps secrets sealed against an earlier cluster decryptable.
pub async fn ensure_sealed_secret<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    workspace: &Workspace,
) -> Result<(), EngineError> {
    let archive = workspace.sealed_secret_archive();
    if archive.is_file() {
        fatal("restore sealed secret", ctx.kubectl.apply_overwrite(&archive)).await?;
        tracing::info!(path = %archive.display(), "restored sealed secret");
    } else {
        tracing::info!(path = %archive.display(), "no sealed secret archive, skipping restore");
    }

    let yaml = fatal(
        "fetch sealed secret",
        ctx.kubectl.get_secrets_yaml(SEALED_SECRETS_NAMESPACE, SEALED_SECRETS_SELECTOR),
    )
    .await?;

    if let Some(dir) = archive.parent() {
        std::fs::create_dir_all(dir).map_err(EngineError::io("create", dir))?;
    }
    std::fs::write(&archive, yaml).map_err(EngineError::io("write", &archive))?;
    tracing::info!(path = %archive.display(), "archived sealed secret");
    Ok(())
}

/// Create the secret flux uses to pull from the workspace git server.
///
/// An existing secret is left as is.
pub async fn ensure_flux_git_secret<R: ProcessRunner, L: ToolLocator>(
    ctx: &ClusterContext<R, L>,
    workspace: &Workspace,
) -> Result<(), EngineError> {
    let identity = workspace.private_key();
    match ctx.kubectl.create_generic_secret(FLUX_SECRET, &identity, FLUX_NAMESPACE).await {
        Ok(()) => {
            tracing::info!(secret = FLUX_SECRET, "created flux git secret");
            Ok(())
        }
        Err(e) if e.stderr().is_some_and(|s| s.contains("AlreadyExists")) => {
            tracing::info!(secret = FLUX_SECRET, "flux git secret exists, skipping");
            Ok(())
        }
        Err(source) => Err(EngineError::Step { step: "create flux git secret".to_string(), source }),
    }
}

#[cfg(test)]
#[path = "secrets_tests.rs"]
mod tests;
