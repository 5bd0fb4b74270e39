//! Scoped lock guards / 作用域锁守卫
//!
//! Unlock on drop, so the lock is released on every exit path.
//! 析构时解锁，任何退出路径都会释放锁。

use std::mem;

use log::warn;

use crate::{FileLock, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
  Shared,
  Exclusive,
}

/// Held lock, released on drop / 持有的锁，析构时释放
#[must_use = "dropping the guard releases the lock immediately"]
#[derive(Debug)]
pub struct Guard<'a> {
  lock: &'a FileLock,
  kind: Kind,
}

impl<'a> Guard<'a> {
  #[inline]
  pub fn kind(&self) -> Kind {
    self.kind
  }

  #[inline]
  pub fn file_lock(&self) -> &'a FileLock {
    self.lock
  }

  /// Release now and return the unlock error that drop would only log
  /// 立即释放并返回 drop 时只会记录日志的解锁错误
  pub fn unlock(self) -> Result<()> {
    let lock = self.lock;
    mem::forget(self);
    lock.unlock()
  }
}

impl Drop for Guard<'_> {
  fn drop(&mut self) {
    if let Err(e) = self.lock.unlock() {
      warn!("unlock {:?} on drop: {e}", self.lock.path());
    }
  }
}

impl FileLock {
  /// Blocking exclusive lock as a guard / 阻塞获取排他锁守卫
  pub fn write(&self) -> Result<Guard<'_>> {
    self.lock()?;
    Ok(Guard {
      lock: self,
      kind: Kind::Exclusive,
    })
  }

  /// Non-blocking exclusive lock as a guard / 非阻塞获取排他锁守卫
  pub fn try_write(&self) -> Result<Guard<'_>> {
    self.try_lock()?;
    Ok(Guard {
      lock: self,
      kind: Kind::Exclusive,
    })
  }

  /// Blocking shared lock as a guard / 阻塞获取共享锁守卫
  pub fn read(&self) -> Result<Guard<'_>> {
    self.rlock()?;
    Ok(Guard {
      lock: self,
      kind: Kind::Shared,
    })
  }
}
