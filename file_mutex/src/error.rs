use std::{io, path::PathBuf};

use thiserror::Error;

use crate::os::{self, Code};

#[derive(Debug, Error)]
pub enum Error {
  /// Held by another handle, returned only by non-blocking acquisition
  /// 被其他句柄持有，仅由非阻塞获取返回
  #[error("file locked / 文件已锁定")]
  Locked,

  #[error("open {path:?}: {source}")]
  Open {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("io error: {0}")]
  Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  /// Translate a non-blocking acquire failure
  /// 转换非阻塞获取失败
  pub(crate) fn contended(e: io::Error) -> Self {
    match os::code(&e) {
      Code::Locked => Self::Locked,
      _ => Self::Io(e),
    }
  }

  #[inline]
  pub fn is_locked(&self) -> bool {
    matches!(self, Self::Locked)
  }

  /// Platform error code, if any / 平台错误码
  pub fn raw_os_error(&self) -> Option<i32> {
    match self {
      Self::Locked => None,
      Self::Open { source, .. } => source.raw_os_error(),
      Self::Io(e) => e.raw_os_error(),
    }
  }
}
