use std::fs;
use std::path::Path;

// Copies the built single-page client into `static/dist` so `include_dir!`
// can embed it. Without a client build an empty directory is embedded and
// only the API is served.
fn main() {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static directory");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend/dist into static");
    }
    if !embedded_dir.exists() {
        fs::create_dir_all(&embedded_dir).expect("create static/dist");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
