use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::film::Film;
use crate::math::Color;

pub const PPM_MAGIC: &str = "P3";
pub const PPM_MAX_VALUE: u32 = 255;

#[derive(Debug, Clone, PartialEq)]
pub enum PpmError {
    BadMagic(String),
    UnexpectedEnd,
    BadToken(String),
    UnsupportedMaxValue(u32),
    ChannelOutOfRange(u32),
    TooLarge { width: usize, height: usize },
    TrailingData,
}

impl fmt::Display for PpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PpmError::BadMagic(magic) => write!(f, "expected {} header, found {:?}", PPM_MAGIC, magic),
            PpmError::UnexpectedEnd => write!(f, "unexpected end of image data"),
            PpmError::BadToken(token) => write!(f, "expected an integer, found {:?}", token),
            PpmError::UnsupportedMaxValue(v) => {
                write!(f, "unsupported max value {}, only {} is supported", v, PPM_MAX_VALUE)
            }
            PpmError::ChannelOutOfRange(v) => write!(f, "channel value {} exceeds max value", v),
            PpmError::TooLarge { width, height } => {
                write!(f, "image size {}x{} is too large", width, height)
            }
            PpmError::TrailingData => write!(f, "more samples than width * height"),
        }
    }
}

impl std::error::Error for PpmError {}

/// Plain text P3 pixmap. One line per image row.
pub fn encode_ppm<W: Write>(film: &Film<Color>, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", PPM_MAGIC)?;
    writeln!(out, "{} {}", film.width, film.height)?;
    writeln!(out, "{}", PPM_MAX_VALUE)?;
    for row in film.rows() {
        for c in row {
            write!(out, "{} {} {} ", c.r, c.g, c.b)?;
        }
        writeln!(out)?;
    }
    out.flush()
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("image"));
    name.push(".partial");
    path.with_file_name(name)
}

/// Writes through a sibling temporary file that is renamed into place once complete,
/// so a failed write never leaves a truncated image at `path`.
pub fn write_atomically<F>(path: &Path, encode: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = temporary_path(path);
    let result = File::create(&tmp).and_then(|file| {
        let mut writer = BufWriter::new(file);
        encode(&mut writer)?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()
    });
    match result.and_then(|_| fs::rename(&tmp, path)) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(e)
        }
    }
}

pub fn write_ppm(film: &Film<Color>, path: &Path) -> io::Result<()> {
    write_atomically(path, |w| encode_ppm(film, w))?;
    info!(path = %path.display(), "wrote ppm");
    Ok(())
}

pub fn write_png(film: &Film<Color>, path: &Path) -> io::Result<()> {
    let img = image::RgbImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        film.at(x as usize, y as usize).into()
    });
    write_atomically(path, |w| {
        img.write_to(w, image::ImageOutputFormat::Png)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    })?;
    info!(path = %path.display(), "wrote png");
    Ok(())
}

/// Parses a P3 pixmap with max value 255. `#` starts a comment running to the end of the line.
pub fn parse_ppm(data: &str) -> Result<Film<Color>, PpmError> {
    let mut tokens = data
        .lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some(PPM_MAGIC) => {}
        Some(other) => return Err(PpmError::BadMagic(other.to_string())),
        None => return Err(PpmError::UnexpectedEnd),
    }
    let mut next_number = || -> Result<u32, PpmError> {
        let token = tokens.next().ok_or(PpmError::UnexpectedEnd)?;
        token
            .parse::<u32>()
            .map_err(|_| PpmError::BadToken(token.to_string()))
    };
    let width = next_number()? as usize;
    let height = next_number()? as usize;
    let max_value = next_number()?;
    if max_value != PPM_MAX_VALUE {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }

    let samples = width
        .checked_mul(height)
        .filter(|n| n.checked_mul(3).is_some())
        .ok_or(PpmError::TooLarge { width, height })?;

    let mut next_channel = || -> Result<u8, PpmError> {
        let v = next_number()?;
        u8::try_from(v).map_err(|_| PpmError::ChannelOutOfRange(v))
    };
    // grows with the data actually present, never with the header's claim
    let mut buffer = Vec::new();
    for _ in 0..samples {
        buffer.push(Color::new(next_channel()?, next_channel()?, next_channel()?));
    }
    if tokens.next().is_some() {
        return Err(PpmError::TrailingData);
    }
    Ok(Film {
        buffer,
        width,
        height,
    })
}

pub fn read_ppm(path: &Path) -> Result<Film<Color>, Box<dyn std::error::Error>> {
    let data = fs::read_to_string(path)?;
    Ok(parse_ppm(&data)?)
}
