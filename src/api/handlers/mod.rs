// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod users;

pub use users::{create_user, list_users};
