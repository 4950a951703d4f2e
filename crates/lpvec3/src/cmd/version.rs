use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("lpvec3 {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: lpvec3");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("LPVEC3_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "profile: {}",
        option_env!("LPVEC3_BUILD_PROFILE").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "wire: zero_form={}B frame={}B max={}B",
        lpvec3_codec::ZERO_FORM_LEN,
        lpvec3_codec::FRAME_LEN,
        lpvec3_codec::MAX_ENCODED_LEN
    );
    println!("features: serde={}, cli=true", cfg!(feature = "serde"));

    Ok(SUCCESS)
}
