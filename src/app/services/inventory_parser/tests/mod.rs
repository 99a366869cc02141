//! Test fixtures for inventory parser testing
//!
//! Shared export snippets used across the tokenizer, decoder and parser
//! test modules.

use std::io::Write;
use tempfile::NamedTempFile;


/// Header row matching the layout of real inventory exports
pub const FULL_HEADER: &str = "id,name,category,brand,price,stock,sold,available,\
image_1,image_2,image_3,image_4,image_5,image_6,\
socket,form_factor,tdp_watts,memory_type,clock_speed,chipset,vram_gb,\
length_mm,height_mm,slots,interface,capacity_gb,modules_count";

/// Small mixed-category export with quoting, units and a blank line
pub fn create_test_inventory() -> String {
    [
        FULL_HEADER,
        r#"P1,"Ryzen 5 7600, boxed",CPU,AMD,15999,10,2,True,cpu.jpg,,,,,,AM5,,65W,DDR5,3.8GHz,,,,,,,,"#,
        "",
        r#"P2,"ROG Strix B650-A",motherboard,ASUS,21999,4,0,true,mb1.jpg,mb2.jpg,,,,,AM5,ATX,,DDR5,,B650,,,,3,,,"#,
        r#"P3,NH-D15,cooler,Noctua,8999,7,1,false,,,,,,,AM5|LGA1700,,,,,,,,165,,,,"#,
        r#"P4,"RTX 4070 ""Founders""",GPU,NVIDIA,59999,2,5,TRUE,gpu.jpg,,,,,,,,200,,,,12GB,244,,,,,"#,
    ]
    .join("\n")
}

/// Helper to create a temporary export file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
