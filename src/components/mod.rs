//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard cards and read/write the transaction state
//! signal owned by the dashboard page.

pub mod transaction_form;
pub mod transaction_list;
