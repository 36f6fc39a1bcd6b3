use std::fs;

use crate::{CoreError, CoreResult};

pub(crate) fn read_input_file(path: &str) -> CoreResult<String> {
    fs::read_to_string(path)
        .map_err(|error| CoreError::input_file_unreadable(path, &error.to_string()))
}
