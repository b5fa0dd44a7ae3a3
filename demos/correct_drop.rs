use unstable_vec::UnstableVec;

/// A dummy type which prints its character when dropped.
struct EchoDrop(pub char);

impl Drop for EchoDrop {
    fn drop(&mut self) {
        println!("I was dropped: {}", self.0);
    }
}

fn main() {
    let mut uv = UnstableVec::new();
    uv.push(EchoDrop('a'));
    let b_idx = uv.push(EchoDrop('b'));
    uv.push(EchoDrop('c'));

    {
        // Removing it from the vector shouldn't drop the value: it is moved
        // out the vector into this function. 'c' is moved into its slot.
        println!("--- removing 'b' (nothing should be dropped!) ...");
        let _b = uv.swap_erase(b_idx);
        println!("--- index {} now holds '{}'", b_idx, uv[b_idx].0);

        // But now the value goes out of scope and it should be dropped now.
        println!("--- letting 'b' go out of scope (it should be dropped now!) ...");
    }

    println!("--- erasing all 'a's (it should drop 'a'!) ...");
    uv.swap_erase_if(|e| e.0 == 'a');

    // The vector will be dropped at the end of this function and should drop
    // all elements inside it which haven't been removed yet ('c').
    println!("--- Letting 'uv' go out of scope (it should drop 'c'!) ...");
}
