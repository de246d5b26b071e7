// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::env::var;
use std::path::Path;
use std::process::Command;

fn main() {
    if let Ok(pwd) = var("PWD") {
        let p_pwd = Path::new(&pwd);
        if p_pwd.exists() {
            if let (Some(short_hash), Some(long_hash)) = (
                git_output(p_pwd, &["rev-parse", "--short", "HEAD"]),
                git_output(p_pwd, &["rev-parse", "HEAD"]),
            ) {
                println!("cargo:rustc-env=GIT_HASH_SHORT={}", short_hash);
                println!("cargo:rustc-env=GIT_HASH={}", long_hash);
                println!("cargo:rerun-if-changed={}", p_pwd.join(".git").join("HEAD").display());
                return;
            }
        }
    }

    // Built outside a git checkout, for example from a packaged release.
    println!("cargo:rustc-env=GIT_HASH_SHORT=unknown");
    println!("cargo:rustc-env=GIT_HASH=unknown");
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).current_dir(dir).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout).ok().map(|hash| hash.trim().to_string())
}
