// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use criterion::criterion_main;

criterion_main! {
    map_v_map_catching::comparisons,
}
