use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{bracketed, parse_macro_input, LitInt, Token};

/// A map literal, either as rows of bits or as a minterm list
enum MapLiteral {
    Rows(Vec<Vec<LitInt>>),
    Minterms {
        variables: LitInt,
        minterms: Vec<LitInt>,
    },
}

impl Parse for MapLiteral {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitInt) {
            // kmap!(4 => [0, 5, 15])
            let variables: LitInt = input.parse()?;
            input.parse::<Token![=>]>()?;
            let content;
            bracketed!(content in input);
            let minterms = Punctuated::<LitInt, Token![,]>::parse_terminated(&content)?;
            return Ok(MapLiteral::Minterms {
                variables,
                minterms: minterms.into_iter().collect(),
            });
        }

        // kmap![[1, 0], [0, 1]]
        let mut rows = Vec::new();
        while !input.is_empty() {
            let content;
            bracketed!(content in input);
            let row = Punctuated::<LitInt, Token![,]>::parse_terminated(&content)?;
            rows.push(row.into_iter().collect());
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(MapLiteral::Rows(rows))
    }
}

/// Variable tag for a supported shape
fn variable_tag_for_shape(rows: usize, cols: usize) -> Option<&'static str> {
    match (rows, cols) {
        (2, 2) => Some("Two"),
        (4, 2) => Some("Three"),
        (4, 4) => Some("Four"),
        _ => None,
    }
}

fn variable_tag(variables: usize) -> Option<&'static str> {
    match variables {
        2 => Some("Two"),
        3 => Some("Three"),
        4 => Some("Four"),
        _ => None,
    }
}

impl MapLiteral {
    /// Validate the literal and produce `(variable tag, row-major bits)`
    fn into_bits(self) -> Result<(&'static str, Vec<u8>)> {
        match self {
            MapLiteral::Rows(rows) => {
                let num_rows = rows.len();
                let num_cols = rows.first().map_or(0, Vec::len);
                let tag = variable_tag_for_shape(num_rows, num_cols)
                    .filter(|_| rows.iter().all(|row| row.len() == num_cols))
                    .ok_or_else(|| {
                        syn::Error::new(
                            proc_macro2::Span::call_site(),
                            "a Karnaugh map must be 2x2, 4x2 or 4x4",
                        )
                    })?;
                let mut bits = Vec::with_capacity(num_rows * num_cols);
                for lit in rows.iter().flatten() {
                    let value: u8 = lit.base10_parse()?;
                    if value > 1 {
                        return Err(syn::Error::new(
                            lit.span(),
                            "only 0 and 1 are valid cell values",
                        ));
                    }
                    bits.push(value);
                }
                Ok((tag, bits))
            }
            MapLiteral::Minterms {
                variables,
                minterms,
            } => {
                let count: usize = variables.base10_parse()?;
                let tag = variable_tag(count).ok_or_else(|| {
                    syn::Error::new(
                        variables.span(),
                        "Karnaugh maps support 2, 3 or 4 variables",
                    )
                })?;
                let mut bits = vec![0u8; 1 << count];
                for lit in &minterms {
                    let minterm: usize = lit.base10_parse()?;
                    if minterm >= bits.len() {
                        return Err(syn::Error::new(
                            lit.span(),
                            format!("minterm out of range for a {}-variable map", count),
                        ));
                    }
                    // Positional numbering is row-major, so the minterm is the index
                    bits[minterm] = 1;
                }
                Ok((tag, bits))
            }
        }
    }
}

/// The `kmap!` procedural macro for Karnaugh map literals
///
/// Builds a `karnaugh_logic::Grid` whose shape and values are checked at
/// compile time.
///
/// # Supported Syntax
///
/// - `kmap![[1, 0], [0, 1]]` - rows of bits; the shape must be 2x2, 4x2 or 4x4
/// - `kmap!(4 => [0, 5, 15])` - variable count and positional minterms
///
/// # Examples
///
/// ```ignore
/// use karnaugh_logic::kmap;
///
/// let two = kmap![[1, 1], [0, 0]];
/// let three = kmap![[1, 0], [1, 0], [0, 0], [0, 1]];
/// let four = kmap!(4 => [0, 2, 8, 10]);
/// ```
#[proc_macro]
pub fn kmap(input: TokenStream) -> TokenStream {
    let literal = parse_macro_input!(input as MapLiteral);
    let (tag, bits) = match literal.into_bits() {
        Ok(parts) => parts,
        Err(err) => return err.to_compile_error().into(),
    };
    let variant = syn::Ident::new(tag, proc_macro2::Span::call_site());
    let tokens = quote! {
        ::karnaugh_logic::Grid::from_bits(
            ::karnaugh_logic::VariableCount::#variant,
            &[#(#bits),*],
        )
    };
    TokenStream::from(tokens)
}
