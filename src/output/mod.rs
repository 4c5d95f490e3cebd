use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::Formatter;

// o DEL também sai escapado, como o resto do que não é ASCII imprimível
const DEL: u8 = 0x7f;

/// Formatter JSON compatível com o que o servidor sempre recebeu dos helpers:
/// `", "` entre itens, `": "` entre chave e valor e tudo fora do ASCII escapado como `\uXXXX`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.bytes().all(|b| b.is_ascii() && b != DEL) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() && ch as u8 != DEL {
                writer.write_all(&[ch as u8])?;
                continue;
            }
            // caracteres fora do BMP viram um par surrogate
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
        }
        Ok(())
    }
}

/// Serializa um documento numa única linha, no formato acima.
pub fn to_json_line<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;

    // a saída é sempre ASCII
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Escreve o documento de resposta no stdout, seguido de quebra de linha.
pub fn emit<T>(value: &T)
where
    T: ?Sized + Serialize,
{
    match to_json_line(value) {
        Ok(line) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
                tracing::error!("falha ao escrever resposta no stdout: {}", err);
            }
        }
        Err(err) => tracing::error!("falha ao serializar resposta: {}", err),
    }
}
