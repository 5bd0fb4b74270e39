//! Other unix: whole-file `flock(2)`
//! 其他 unix：整文件 `flock(2)`
//!
//! No byte-range form, the whole file is the sentinel region.
//! 无字节范围形式，整个文件即哨兵区域。

use std::{fs::File, io, os::fd::AsRawFd};

pub use super::unix::{close, open_options};
use super::unix::cvt;

pub const LOCKED: &[i32] = &[libc::EWOULDBLOCK];

fn flock(file: &File, op: libc::c_int) -> io::Result<()> {
  cvt(unsafe { libc::flock(file.as_raw_fd(), op) })
}

pub fn lock_ex(file: &File, block: bool) -> io::Result<()> {
  let op = if block {
    libc::LOCK_EX
  } else {
    libc::LOCK_EX | libc::LOCK_NB
  };
  flock(file, op)
}

pub fn lock_sh(file: &File) -> io::Result<()> {
  flock(file, libc::LOCK_SH)
}

pub fn unlock(file: &File) -> io::Result<()> {
  flock(file, libc::LOCK_UN)
}

#[cfg(test)]
mod tests {
  use std::io;

  use crate::os::{Code, code};

  fn of(c: i32) -> Code {
    code(&io::Error::from_raw_os_error(c))
  }

  #[test]
  fn test_code_table() {
    assert_eq!(of(libc::EWOULDBLOCK), Code::Locked);
    assert_eq!(of(libc::EINTR), Code::Other);
    assert_eq!(of(libc::EBADF), Code::Other);
    assert_eq!(of(libc::ENOLCK), Code::Other);
  }
}
