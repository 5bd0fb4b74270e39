//! Linux / Android: open file description byte-range locks
//! Linux / Android：基于打开文件描述的字节范围锁
//!
//! `F_OFD_SETLK` locks belong to the open file description, not the process,
//! so two `open` calls in one process exclude each other like `flock`,
//! while still covering only the sentinel byte.
//! OFD 锁属于打开文件描述而非进程，同进程两次 open 互斥。

use std::{fs::File, io, mem, os::fd::AsRawFd};

pub use super::unix::{close, open_options};
use super::unix::cvt;

pub const LOCKED: &[i32] = &[libc::EAGAIN, libc::EACCES];

// Sentinel region: first byte / 哨兵区域：首字节
const START: libc::off_t = 0;
const LEN: libc::off_t = 1;

fn setlk(file: &File, kind: libc::c_int, block: bool) -> io::Result<()> {
  // l_pid must stay 0 for OFD locks / OFD 锁要求 l_pid 为 0
  let mut fl: libc::flock = unsafe { mem::zeroed() };
  fl.l_type = kind as libc::c_short;
  fl.l_whence = libc::SEEK_SET as libc::c_short;
  fl.l_start = START;
  fl.l_len = LEN;

  let cmd = if block {
    libc::F_OFD_SETLKW
  } else {
    libc::F_OFD_SETLK
  };
  cvt(unsafe { libc::fcntl(file.as_raw_fd(), cmd, &fl as *const libc::flock) })
}

pub fn lock_ex(file: &File, block: bool) -> io::Result<()> {
  setlk(file, libc::F_WRLCK as libc::c_int, block)
}

pub fn lock_sh(file: &File) -> io::Result<()> {
  setlk(file, libc::F_RDLCK as libc::c_int, true)
}

pub fn unlock(file: &File) -> io::Result<()> {
  setlk(file, libc::F_UNLCK as libc::c_int, false)
}
