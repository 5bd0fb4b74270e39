//! Windows: `LockFileEx` on the first byte
//! Windows：对首字节 `LockFileEx`

use std::{
  fs::{File, OpenOptions},
  io, mem,
  os::windows::{
    fs::OpenOptionsExt,
    io::{AsRawHandle, IntoRawHandle},
  },
};

use windows_sys::Win32::{
  Foundation::{CloseHandle, ERROR_LOCK_VIOLATION},
  Storage::FileSystem::{
    FILE_SHARE_READ, FILE_SHARE_WRITE, LOCKFILE_EXCLUSIVE_LOCK, LOCKFILE_FAIL_IMMEDIATELY,
    LockFileEx, UnlockFileEx,
  },
  System::IO::OVERLAPPED,
};

pub const LOCKED: &[i32] = &[ERROR_LOCK_VIOLATION as i32];

// Sentinel region: offset 0 (zeroed OVERLAPPED), 1 byte
// 哨兵区域：偏移 0（OVERLAPPED 置零），1 字节
const LEN: u32 = 1;

/// No permission bits on windows, `mode` is ignored
/// windows 无权限位，忽略 `mode`
pub fn open_options(o: &mut OpenOptions, _mode: u32) {
  o.share_mode(FILE_SHARE_READ | FILE_SHARE_WRITE);
}

#[inline]
fn cvt(ok: bool) -> io::Result<()> {
  if ok {
    return Ok(());
  }
  Err(io::Error::last_os_error())
}

fn lock(file: &File, flags: u32) -> io::Result<()> {
  let mut ol: OVERLAPPED = unsafe { mem::zeroed() };
  cvt(unsafe { LockFileEx(file.as_raw_handle() as _, flags, 0, LEN, 0, &mut ol) } != 0)
}

pub fn lock_ex(file: &File, block: bool) -> io::Result<()> {
  let flags = if block {
    LOCKFILE_EXCLUSIVE_LOCK
  } else {
    LOCKFILE_EXCLUSIVE_LOCK | LOCKFILE_FAIL_IMMEDIATELY
  };
  lock(file, flags)
}

pub fn lock_sh(file: &File) -> io::Result<()> {
  lock(file, 0)
}

pub fn unlock(file: &File) -> io::Result<()> {
  let mut ol: OVERLAPPED = unsafe { mem::zeroed() };
  cvt(unsafe { UnlockFileEx(file.as_raw_handle() as _, 0, LEN, 0, &mut ol) } != 0)
}

pub fn close(file: File) -> io::Result<()> {
  cvt(unsafe { CloseHandle(file.into_raw_handle() as _) } != 0)
}
