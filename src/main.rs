// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::env;

use anyhow::Result;

use cfgecho::Invocation;

fn main() -> Result<()> {
    let invocation = Invocation::from_args(env::args_os());
    println!("{invocation}");
    Ok(())
}
