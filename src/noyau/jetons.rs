// src/noyau/jetons.rs

use super::operateur::Operator;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Littéral décimal positif.
    Num(f64),
    Op(Operator),
}

/// Tokenize une chaîne plate (sans parenthèses) en jetons.
/// Lecture gloutonne, tolérante:
/// - `chiffres.chiffres`, sinon `chiffres`
/// - un opérateur + - * /
/// - tout le reste est ignoré (espaces, lettres, point isolé, parenthèses…)
///
/// Pas de moins unaire : "-3" donne [Op(Sub), Num(3)].
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if let Some(op) = Operator::depuis_symbole(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            // partie fractionnaire seulement si au moins un chiffre suit le point
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // chiffres ASCII (+ un point) : le parse f64 réussit toujours
            let litteral: String = chars[start..i].iter().collect();
            let Ok(v) = litteral.parse::<f64>() else {
                continue;
            };
            out.push(Tok::Num(v));
            continue;
        }

        i += 1;
    }

    out
}

/// Format utilitaire (debug/journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
