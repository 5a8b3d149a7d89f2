use std::io::Write;

use anyhow::Result;

pub const TIPS: [&str; 10] = [
    "Separate waste at the source to improve recycling efficiency",
    "Compost organic waste to reduce landfill methane emissions",
    "Choose products with minimal packaging to reduce plastic waste",
    "Participate in community recycling programs",
    "Repair and reuse items instead of discarding them",
    "Support businesses with sustainable waste management practices",
    "Educate others about the importance of proper waste disposal",
    "Use reusable containers instead of single-use plastics",
    "Opt for digital documents to reduce paper waste",
    "Advocate for better waste management policies in your community",
];

pub fn render_tips<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n===== ENVIRONMENTAL TIPS =====")?;
    for (i, tip) in TIPS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, tip)?;
    }
    writeln!(out, "===================================")?;
    Ok(())
}
