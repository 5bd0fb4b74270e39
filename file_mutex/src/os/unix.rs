//! Shared unix helpers / unix 通用辅助

use std::{
  fs::{File, OpenOptions},
  io,
  os::{
    fd::IntoRawFd,
    unix::fs::OpenOptionsExt,
  },
};

pub fn open_options(o: &mut OpenOptions, mode: u32) {
  o.mode(mode);
}

/// Close and report the error `Drop for File` would discard
/// 关闭并返回 `File` 析构时会丢弃的错误
pub fn close(file: File) -> io::Result<()> {
  let fd = file.into_raw_fd();
  cvt(unsafe { libc::close(fd) })
}

#[inline]
pub fn cvt(r: libc::c_int) -> io::Result<()> {
  if r == -1 {
    return Err(io::Error::last_os_error());
  }
  Ok(())
}
