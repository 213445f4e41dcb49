// src/noyau/format.rs
//
// Affichage des nombres.
// - format_general : équivalent de "%.Ng" (N chiffres significatifs,
//   fixe ou scientifique, zéros finaux retirés)
// - format_litteral : texte décimal réinjecté dans une expression (jamais d’exposant)

/// Précision bornée (f64 : au-delà de 17 chiffres, rien à gagner).
pub const PRECISION_MAX: usize = 17;

fn retirer_zeros_finaux(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Rendu "%.Ng".
///
/// Exemples (N = 10) : 10 -> "10", 0.1+0.2 -> "0.3", 1e10 -> "1e+10", 1e-5 -> "1e-05".
pub fn format_general(x: f64, precision: usize) -> String {
    let p = precision.clamp(1, PRECISION_MAX);

    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // L’exposant est lu APRÈS arrondi à p chiffres (comme printf).
    let sci = format!("{:.*e}", p - 1, x);
    let Some((mantisse, exp)) = sci.split_once('e') else {
        return format!("{x}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{x}");
    };

    if exp < -4 || exp >= p as i32 {
        let signe = if exp < 0 { '-' } else { '+' };
        return format!(
            "{}e{signe}{:02}",
            retirer_zeros_finaux(mantisse),
            exp.unsigned_abs()
        );
    }

    let decimales = (p as i32 - 1 - exp).max(0) as usize;
    let fixe = format!("{x:.decimales$}");
    retirer_zeros_finaux(&fixe).to_string()
}

/// Texte décimal d’un résultat intermédiaire, relu ensuite par le tokenizer.
pub fn format_litteral(x: f64) -> String {
    format!("{x}")
}
