//! This is just a dummy library to check the assembly output of some
//! functions.

use unstable_vec::UnstableVec;

pub fn index_u32(uv: &UnstableVec<u32>, index: usize) -> u32 {
    uv[index]
}

pub fn push_u32(uv: &mut UnstableVec<u32>, val: u32) -> usize {
    uv.push(val)
}

pub fn swap_erase_u32(uv: &mut UnstableVec<u32>, index: usize) -> u32 {
    uv.swap_erase(index)
}

pub fn swap_erase_string(uv: &mut UnstableVec<String>, index: usize) -> String {
    uv.swap_erase(index)
}

pub fn pop_any_u32(uv: &mut UnstableVec<u32>) -> Option<u32> {
    uv.pop_any()
}

pub fn swap_erase_if_even_u32(uv: &mut UnstableVec<u32>) -> usize {
    uv.swap_erase_if(|&x| x % 2 == 0)
}
