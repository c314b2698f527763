// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use std::{
    cell::Cell,
    rc::Rc,
};

/// Sets a shared flag when dropped, so tests can verify a value's fate.
///
/// Unlike a borrowed flag, the shared cell lets the tester be moved into a
/// closure that unwinds.
pub struct DropFlag {
    flag: Rc<Cell<bool>>,
}

impl DropFlag {
    pub fn new() -> (DropFlag, Rc<Cell<bool>>) {
        let flag = Rc::new(Cell::new(false));
        let tester = DropFlag { flag: flag.clone() };
        (tester, flag)
    }
}

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.flag.set(true);
    }
}
