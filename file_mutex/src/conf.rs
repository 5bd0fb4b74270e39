//! Open options / 打开选项

/// Default permission bits of a new lock file (unix only)
/// 新锁文件默认权限位（仅 unix）
pub const DEFAULT_MODE: u32 = 0o644;

/// Lock file options, later ones override earlier ones
/// 锁文件选项，后者覆盖前者
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conf {
  /// Permission bits applied on creation, ignored on windows
  /// 创建时应用的权限位，windows 上忽略
  Mode(u32),
  /// Create missing parent directories / 创建缺失的父目录
  CreateDir(bool),
}

/// Parsed config / 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedConf {
  pub mode: u32,
  pub create_dir: bool,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self {
      mode: DEFAULT_MODE,
      create_dir: false,
    }
  }
}

impl ParsedConf {
  pub fn parse(conf: &[Conf]) -> Self {
    let mut c = Self::default();
    for i in conf {
      match *i {
        Conf::Mode(mode) => c.mode = mode,
        Conf::CreateDir(b) => c.create_dir = b,
      }
    }
    c
  }
}
