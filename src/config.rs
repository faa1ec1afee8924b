/*
config.rs

Copyright 2025 Hervé Quatremain

This file is part of Memopath.

Memopath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Memopath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Memopath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Application constants and user directories.

use std::env;
use std::path::PathBuf;

/// Notice printed by `--version`.
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain

Memopath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.";

/// Return the directory where Memopath stores its data, such as the high
/// scores file.
///
/// The directory follows the XDG base directory convention:
/// `$XDG_DATA_HOME/memopath`, or `$HOME/.local/share/memopath`. When neither
/// variable is set, the current directory is used.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let mut path: PathBuf = PathBuf::from(dir);
        path.push("memopath");
        return path;
    }
    if let Some(home) = env::var_os("HOME") {
        let mut path: PathBuf = PathBuf::from(home);
        path.push(".local");
        path.push("share");
        path.push("memopath");
        return path;
    }
    PathBuf::from(".")
}
