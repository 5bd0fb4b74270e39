//! Platform lock backends, selected at build time
//! 平台锁后端，编译期选择
//!
//! Every backend exposes the same free functions over a borrowed `File`:
//! `open_options`, `lock_ex`, `lock_sh`, `unlock`, `close`,
//! plus the `LOCKED` error code table.
//! 每个后端对借用的 `File` 暴露相同的函数及错误码表。

use std::io;

#[cfg(unix)]
mod unix;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
mod flock;
#[cfg(windows)]
mod windows;

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub use flock::*;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::*;
#[cfg(windows)]
pub use windows::*;

#[cfg(not(any(unix, windows)))]
compile_error!("unsupported platform");

/// Raw OS error class / 原始系统错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
  /// Held by someone else / 被他人持有
  Locked,
  Other,
}

pub fn code(e: &io::Error) -> Code {
  match e.raw_os_error() {
    Some(c) if LOCKED.contains(&c) => Code::Locked,
    _ => Code::Other,
  }
}
