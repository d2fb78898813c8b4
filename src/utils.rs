use std::path::{Component, Path, PathBuf};

use candle_core::utils::{cuda_is_available, metal_is_available};
use candle_core::{Device, Result};
use serde::{de::Error, Deserialize, Deserializer};

/// Pick the compute device for a `gpu` index, negative meaning CPU.
pub fn device(gpu: i32) -> Result<Device> {
    if gpu < 0 {
        Ok(Device::Cpu)
    } else if cuda_is_available() {
        Device::new_cuda(gpu as usize)
    } else if metal_is_available() {
        Device::new_metal(gpu as usize)
    } else {
        #[cfg(all(target_os = "macos", target_arch = "aarch64"))]
        {
            log::warn!("gpu {gpu} requested, running on CPU; build with `--features metal`");
        }
        #[cfg(not(all(target_os = "macos", target_arch = "aarch64")))]
        {
            log::warn!("gpu {gpu} requested, running on CPU; build with `--features cuda`");
        }
        Ok(Device::Cpu)
    }
}

/// Replace a leading `~` component with the current user's home directory.
///
/// Paths without that prefix, and `~user`, are only normalized. Returns
/// `None` when the home directory cannot be determined.
pub fn expand_user<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = normalize(path.as_ref());
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir()?;
            let rest = components.as_path();
            if rest.as_os_str().is_empty() {
                Some(home)
            } else {
                Some(home.join(rest))
            }
        }
        _ => Some(path.clone()),
    }
}

/// Drop repeated and trailing separators and `.` components.
fn normalize(path: &Path) -> PathBuf {
    let normalized = path
        .components()
        .filter(|component| *component != Component::CurDir)
        .collect::<PathBuf>();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

pub(crate) fn deserialize_expanded_path<'de, D>(
    deserializer: D,
) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let path = PathBuf::deserialize(deserializer)?;
    expand_user(&path).ok_or_else(|| {
        D::Error::custom(format!(
            "could not determine home directory to expand {path:?}"
        ))
    })
}
