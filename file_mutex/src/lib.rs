#![cfg_attr(docsrs, feature(doc_cfg))]

//! # file_mutex - Cross-process file mutex / 跨进程文件互斥锁
//!
//! Read/write lock shared by independent processes through a backing file.
//! The file content is never touched, it only serves as a rendezvous token.
//! 通过后备文件在独立进程间共享的读写锁，文件内容从不读写，仅作会合令牌。
//!
//! Lock state lives in the OS only. Closing the handle (explicit [`FileLock::close`],
//! drop, or process exit) always releases whatever is still held.
//! 锁状态只存在于操作系统。关闭句柄（显式 close、drop 或进程退出）总会释放锁。
//!
//! Two `FileLock`s on one path in the same process are two independent holders
//! and can deadlock each other.
//! 同进程对同一路径的两个 `FileLock` 是两个独立持有者，可能互相死锁。

pub mod conf;
pub mod error;
pub mod guard;
mod os;

use std::{
  fs,
  path::{Path, PathBuf},
};

pub use conf::{Conf, ParsedConf};
pub use error::{Error, Result};
pub use guard::{Guard, Kind};
use log::trace;

/// Read/write lock on a backing file / 后备文件读写锁
#[derive(Debug)]
pub struct FileLock {
  file: fs::File,
  path: PathBuf,
}

impl FileLock {
  /// Open or create the lock file / 打开或创建锁文件
  pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
    Self::open(path, &[])
  }

  /// Like [`FileLock::new`], applying unix permission bits when the file is created.
  /// On windows `mode` is ignored and this behaves exactly like `new`.
  /// 同 `new`，创建时应用 unix 权限位；windows 上忽略 `mode`，行为与 `new` 相同。
  pub fn new_with_permissions(path: impl Into<PathBuf>, mode: u32) -> Result<Self> {
    Self::open(path, &[Conf::Mode(mode)])
  }

  /// Open or create the lock file with [`Conf`] options, later options override
  /// earlier ones. `new` and `new_with_permissions` delegate here.
  /// 按 [`Conf`] 选项打开或创建锁文件，后面的选项覆盖前面的。
  /// `new` 与 `new_with_permissions` 均委托于此。
  pub fn open(path: impl Into<PathBuf>, conf: &[Conf]) -> Result<Self> {
    let path = path.into();
    let conf = ParsedConf::parse(conf);
    let open_err = |source| Error::Open {
      path: path.clone(),
      source,
    };

    if conf.create_dir
      && let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(open_err)?;
    }

    let mut o = fs::OpenOptions::new();
    o.read(true).write(true).create(true).truncate(false);
    os::open_options(&mut o, conf.mode);
    let file = o.open(&path).map_err(open_err)?;

    trace!("file_mutex open {path:?}");
    Ok(Self { file, path })
  }

  /// Path given at construction, for diagnostics
  /// 构造时的路径，用于诊断
  #[inline]
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Block until the exclusive lock is held. No timeout.
  /// 阻塞直到持有排他锁，无超时。
  pub fn lock(&self) -> Result<()> {
    os::lock_ex(&self.file, true)?;
    trace!("file_mutex lock {:?}", self.path);
    Ok(())
  }

  /// Exclusive lock without waiting, [`Error::Locked`] if held elsewhere
  /// 非阻塞获取排他锁，被他处持有时返回 [`Error::Locked`]
  pub fn try_lock(&self) -> Result<()> {
    os::lock_ex(&self.file, false).map_err(Error::contended)?;
    trace!("file_mutex try_lock {:?}", self.path);
    Ok(())
  }

  /// Block until a shared lock is held / 阻塞直到持有共享锁
  pub fn rlock(&self) -> Result<()> {
    os::lock_sh(&self.file)?;
    trace!("file_mutex rlock {:?}", self.path);
    Ok(())
  }

  /// Release the lock held through this handle, shared or exclusive.
  /// Unlocking while not locked is platform-defined and propagated.
  /// 释放本句柄持有的锁（共享或排他）。未加锁时解锁的结果由平台决定并原样返回。
  pub fn unlock(&self) -> Result<()> {
    os::unlock(&self.file)?;
    trace!("file_mutex unlock {:?}", self.path);
    Ok(())
  }

  /// Same as [`FileLock::unlock`] / 同 unlock
  #[inline]
  pub fn runlock(&self) -> Result<()> {
    self.unlock()
  }

  /// Unlock then close the handle. The handle is closed even when unlock fails,
  /// in which case the unlock error is returned as is. Closing an idle lock is
  /// therefore platform-defined like [`FileLock::unlock`]: `Ok` on unix,
  /// `ERROR_NOT_LOCKED` on windows, with the handle closed either way.
  /// 解锁后关闭句柄。解锁失败时仍关闭句柄，并原样返回解锁错误。
  /// 因此关闭空闲锁的结果同 unlock 由平台决定：unix 上成功，windows 上返回
  /// `ERROR_NOT_LOCKED`，句柄均已关闭。
  pub fn close(self) -> Result<()> {
    let Self { file, path } = self;
    let unlocked = os::unlock(&file);
    let closed = os::close(file);
    trace!("file_mutex close {path:?}");
    unlocked?;
    closed?;
    Ok(())
  }
}
