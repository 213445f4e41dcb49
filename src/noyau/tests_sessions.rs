//! Tests des sessions interactives (infixe, parenthèses, RPN).
//!
//! Les scénarios sont tapés comme sur le pavé :
//! - chiffres, '.', + - * /, ( ), '='
//! - 'E' = Enter, 'C' = C, 'A' = AC, '<' = DEL
//! - 'M' = M (stocker), 'R' = MR, 'Z' = MC
//! - espaces ignorés (lisibilité)

use super::{
    transition, Event, InfixSession, InfixVariant, Operator, RpnSession, Session, SessionEffect,
    MARQUEUR_ERREUR,
};

fn evenement(c: char) -> Event {
    match c {
        'E' => Event::Enter,
        'C' => Event::Clear,
        'A' => Event::AllClear,
        '<' => Event::Backspace,
        'M' => Event::MemoryStore,
        'R' => Event::MemoryRecall,
        'Z' => Event::MemoryClear,
        _ => Event::depuis_caractere(c).unwrap_or_else(|| panic!("touche inconnue: {c:?}")),
    }
}

fn taper<S: Session>(s: &mut S, touches: &str) -> SessionEffect {
    let mut effet = s.effect();
    for c in touches.chars().filter(|c| !c.is_whitespace()) {
        effet = s.handle_event(evenement(c));
    }
    effet
}

fn infixe() -> InfixSession {
    InfixSession::new(InfixVariant::Plain)
}

fn parentheses() -> InfixSession {
    InfixSession::new(InfixVariant::Parenthesized)
}

/* ------------------------ Infixe continue ------------------------ */

#[test]
fn infixe_pliage_a_chaque_operateur() {
    let mut s = infixe();

    let e = taper(&mut s, "5+3+");
    assert_eq!(e.display_text, "8");
    assert_eq!(e.operator_highlight, Some(Operator::Add));

    let e = taper(&mut s, "2=");
    assert_eq!(e.display_text, "10");
    assert_eq!(e.history_text, "5+3+2 = 10");
    assert_eq!(e.operator_highlight, None);
    assert_eq!(s.operand(), Some(10.0));
    assert_eq!(s.pending_operator(), None);
}

#[test]
fn infixe_sans_priorite() {
    let mut s = infixe();
    assert_eq!(taper(&mut s, "2+3*4=").display_text, "20");
}

#[test]
fn infixe_egal_sans_operateur_sans_effet() {
    let mut s = infixe();
    let e = taper(&mut s, "7=");
    assert_eq!(e.display_text, "7");
    assert_eq!(e.history_text, "7");
    assert_eq!(s.operand(), None);
}

#[test]
fn infixe_operateur_sur_tampon_vide() {
    let mut s = infixe();
    let e = taper(&mut s, "+4=");
    assert_eq!(e.display_text, "4");
    assert_eq!(e.history_text, "0+4 = 4");
}

#[test]
fn infixe_enchainement_apres_egal() {
    let mut s = infixe();
    taper(&mut s, "2+3=");

    let e = taper(&mut s, "*2=");
    assert_eq!(e.display_text, "10");
    assert_eq!(e.history_text, "5*2 = 10");
}

#[test]
fn infixe_chiffre_apres_egal_repart_de_zero() {
    let mut s = infixe();
    taper(&mut s, "2+3=");

    let e = taper(&mut s, "7");
    assert_eq!(e.display_text, "7");
    assert_eq!(e.history_text, "7");
}

#[test]
fn infixe_clear_ne_touche_que_la_saisie() {
    let mut s = infixe();
    let e = taper(&mut s, "5+3C");
    assert_eq!(e.display_text, "");
    assert_eq!(e.history_text, "5+");
    assert_eq!(s.pending_operator(), Some(Operator::Add));

    let e = taper(&mut s, "4=");
    assert_eq!(e.display_text, "9");
    assert_eq!(e.history_text, "5+4 = 9");
}

#[test]
fn infixe_retour_arriere() {
    let mut s = infixe();
    let e = taper(&mut s, "12<");
    assert_eq!(e.display_text, "1");
    assert_eq!(e.history_text, "1");

    // tampon vide : sans effet
    let e = taper(&mut s, "<<");
    assert_eq!(e.display_text, "");
}

#[test]
fn infixe_division_par_zero() {
    let mut s = infixe();
    taper(&mut s, "9M C");

    let e = taper(&mut s, "5/0=");
    assert!(e.is_error);
    assert_eq!(e.display_text, MARQUEUR_ERREUR);
    assert_eq!(e.history_text, "");
    assert_eq!(s.operand(), None);
    assert_eq!(s.memory(), 9.0, "la mémoire survit à l’erreur");

    // la saisie suivante repart proprement
    let e = taper(&mut s, "4");
    assert!(!e.is_error);
    assert_eq!(e.display_text, "4");
    assert_eq!(taper(&mut s, "+1=").display_text, "5");
}

#[test]
fn infixe_division_par_zero_au_pliage_continu() {
    let mut s = infixe();
    let e = taper(&mut s, "5/0+");
    assert!(e.is_error);
    assert_eq!(s.pending_operator(), None);
}

#[test]
fn infixe_nombre_mal_forme() {
    let mut s = infixe();
    let e = taper(&mut s, "1.2.3+");
    assert!(e.is_error);
}

#[test]
fn infixe_memoire() {
    let mut s = infixe();
    let e = taper(&mut s, "12M");
    assert_eq!(e.memory_text, "M : 12");

    // AC ne vide pas la mémoire
    taper(&mut s, "A");
    assert_eq!(s.memory(), 12.0);

    let e = taper(&mut s, "R");
    assert_eq!(e.display_text, "12");

    // MR marque l’affichage comme "résultat" : le chiffre suivant remplace
    let e = taper(&mut s, "3");
    assert_eq!(e.display_text, "3");

    let e = taper(&mut s, "+R=");
    assert_eq!(e.display_text, "15");
    assert_eq!(e.history_text, "3+12 = 15");

    taper(&mut s, "Z");
    assert_eq!(s.memory(), 0.0);
}

#[test]
fn infixe_memoire_refuse_le_marqueur_erreur() {
    let mut s = infixe();
    taper(&mut s, "7M 1/0= M");
    assert_eq!(s.memory(), 7.0);
}

#[test]
fn infixe_precision_dix_chiffres() {
    let mut s = infixe();
    assert_eq!(taper(&mut s, "1/3=").display_text, "0.3333333333");
}

#[test]
fn infixe_ignore_les_parentheses() {
    let mut s = infixe();
    let e = taper(&mut s, "2+(3");
    assert_eq!(e.history_text, "2+3");
    assert_eq!(s.bracket_depth(), 0);
}

#[test]
fn tout_effacer_revient_a_l_etat_initial() {
    for variante in [InfixVariant::Plain, InfixVariant::Parenthesized] {
        let mut reference = InfixSession::new(variante);
        taper(&mut reference, "8M A");

        let mut s = InfixSession::new(variante);
        taper(&mut s, "8M 2+(3*4 - 1/0 5+6");
        taper(&mut s, "A");
        assert_eq!(s, reference, "variante={variante:?}");

        // idempotent
        taper(&mut s, "A");
        assert_eq!(s, reference);
        assert_eq!(s.memory(), 8.0);
    }
}

#[test]
fn transition_pure() {
    let s = infixe();
    let (s, _) = transition(s, Event::Digit('4'));
    let (s, _) = transition(s, Event::Operator(Operator::Mul));
    let (s, _) = transition(s, Event::Digit('5'));
    let (s, effet) = transition(s, Event::Equals);
    assert_eq!(effet.display_text, "20");
    assert_eq!(s.operand(), Some(20.0));
}

/* ------------------------ Parenthèses ------------------------ */

#[test]
fn parentheses_resultat_paresseux() {
    let mut s = parentheses();

    let e = taper(&mut s, "2+(3*4)");
    assert_eq!(e.display_text, "12");
    assert_eq!(e.history_text, "2+(3*4)");
    assert!(s.bracket_result_ready());
    assert_eq!(s.bracket_depth(), 0);
    // pas encore plié dans l’opération extérieure
    assert_eq!(s.operand(), Some(2.0));
    assert_eq!(s.pending_operator(), Some(Operator::Add));

    let e = taper(&mut s, "=");
    assert_eq!(e.display_text, "14");
    assert_eq!(e.history_text, "2+(3*4) = 14");
    assert!(!s.bracket_result_ready());
}

#[test]
fn parentheses_consommees_par_operateur() {
    let mut s = parentheses();
    let e = taper(&mut s, "2*(1+4)-");
    assert_eq!(e.display_text, "10");
    assert_eq!(taper(&mut s, "3=").display_text, "7");
}

#[test]
fn parentheses_imbriquees() {
    let mut s = parentheses();
    taper(&mut s, "((");
    assert_eq!(s.bracket_depth(), 2);

    let e = taper(&mut s, "1+2)*3)=");
    assert_eq!(e.display_text, "9");
    assert_eq!(e.history_text, "((1+2)*3) = 9");
    assert_eq!(s.bracket_depth(), 0);
}

#[test]
fn parentheses_fermeture_implicite_a_egal() {
    let mut s = parentheses();
    let e = taper(&mut s, "2+(3*4=");
    assert_eq!(e.display_text, "14");
    assert_eq!(e.history_text, "2+(3*4) = 14");
    assert_eq!(s.bracket_depth(), 0);
}

#[test]
fn parentheses_fermante_orpheline_ignoree() {
    let mut s = parentheses();
    let e = taper(&mut s, "5)");
    assert_eq!(e.display_text, "5");
    assert_eq!(e.history_text, "5");
    assert!(!e.is_error);
    assert!(!s.bracket_result_ready());
}

#[test]
fn parentheses_chiffre_apres_fermeture() {
    let mut s = parentheses();
    taper(&mut s, "(1+1)");
    let e = taper(&mut s, "7");
    assert_eq!(e.display_text, "7");
    assert!(!s.bracket_result_ready());
}

#[test]
fn parentheses_ouvrante_apres_groupe_ferme() {
    let mut s = parentheses();
    taper(&mut s, "(1+1)(");
    assert_eq!(s.bracket_depth(), 1);
    assert!(!s.bracket_result_ready());
    assert_eq!(s.effect().history_text, "(1+1)(");

    let e = taper(&mut s, "3)=");
    assert_eq!(e.display_text, "3");
    assert_eq!(e.history_text, "(1+1)(3) = 3");
    assert_eq!(s.bracket_depth(), 0);
}

#[test]
fn parentheses_groupe_seul_finalise_a_egal() {
    let mut s = parentheses();
    let e = taper(&mut s, "(5)=");
    assert_eq!(e.display_text, "5");
    assert_eq!(e.history_text, "(5) = 5");
    assert!(!s.bracket_result_ready());
}

#[test]
fn parentheses_division_par_zero_dans_le_groupe() {
    let mut s = parentheses();
    let e = taper(&mut s, "1+(4/0)");
    assert!(e.is_error);
    assert_eq!(s.bracket_depth(), 0);
    assert_eq!(s.operand(), None);

    assert_eq!(taper(&mut s, "2*3=").display_text, "6");
}

/* ------------------------ RPN ------------------------ */

#[test]
fn rpn_addition() {
    let mut s = RpnSession::new();
    let e = taper(&mut s, "3E4E+");
    assert_eq!(s.stack(), &[7.0]);
    assert_eq!(e.display_text, "7");
    assert_eq!(e.history_text, "Pile : [7]");
    assert_eq!(e.operator_highlight, Some(Operator::Add));
}

#[test]
fn rpn_operateur_sur_pile_vide() {
    let mut s = RpnSession::new();
    let avant = s.effect();
    let e = taper(&mut s, "+");
    assert_eq!(e, avant);
    assert!(s.stack().is_empty());

    // saisie présente mais pile vide : toujours sans effet
    let e = taper(&mut s, "5+");
    assert_eq!(e.display_text, "5");
    assert!(s.stack().is_empty());
}

#[test]
fn rpn_saisie_empilee_par_operateur() {
    let mut s = RpnSession::new();
    assert_eq!(taper(&mut s, "3E4+").display_text, "7");
    assert_eq!(s.stack(), &[7.0]);
}

#[test]
fn rpn_ordre_des_operandes() {
    let mut s = RpnSession::new();
    assert_eq!(taper(&mut s, "8E2-").display_text, "6");
    taper(&mut s, "C");
    assert_eq!(taper(&mut s, "8E2/").display_text, "4");
}

#[test]
fn rpn_resultat_reste_dans_la_saisie() {
    let mut s = RpnSession::new();

    // le résultat 7 est ré-empilé par l’opérateur suivant : 7*7
    let e = taper(&mut s, "3E4+*");
    assert_eq!(e.display_text, "49");
    assert_eq!(s.stack(), &[49.0]);
}

#[test]
fn rpn_enter_duplique_le_resultat() {
    let mut s = RpnSession::new();
    taper(&mut s, "3E4+E");
    assert_eq!(s.stack(), &[7.0, 7.0]);

    // Enter sur saisie vide : sans effet
    taper(&mut s, "E");
    assert_eq!(s.stack(), &[7.0, 7.0]);
}

#[test]
fn rpn_chiffre_remplace_le_resultat() {
    let mut s = RpnSession::new();
    taper(&mut s, "3E4+");
    let e = taper(&mut s, "2*");
    assert_eq!(e.display_text, "14");
    assert_eq!(s.stack(), &[14.0]);
}

#[test]
fn rpn_division_par_zero_vide_la_pile() {
    let mut s = RpnSession::new();
    let e = taper(&mut s, "1E5E0/");
    assert!(e.is_error);
    assert_eq!(e.display_text, MARQUEUR_ERREUR);
    assert!(s.stack().is_empty());

    let e = taper(&mut s, "2");
    assert!(!e.is_error);
    assert_eq!(e.display_text, "2");
}

#[test]
fn rpn_clear_vide_saisie_et_pile() {
    let mut s = RpnSession::new();
    let e = taper(&mut s, "3E4C");
    assert_eq!(e.display_text, "");
    assert!(s.stack().is_empty());
}

#[test]
fn rpn_memoire() {
    let mut s = RpnSession::new();

    taper(&mut s, "3E4+M");
    assert_eq!(s.memory(), 7.0);

    taper(&mut s, "9M");
    assert_eq!(s.memory(), 9.0);

    taper(&mut s, "C R E");
    assert_eq!(s.stack(), &[9.0]);

    taper(&mut s, "Z");
    assert_eq!(s.memory(), 0.0);
}

#[test]
fn rpn_memoire_saisie_vide_prend_le_sommet() {
    let mut s = RpnSession::new();
    let e = taper(&mut s, "3EM");
    assert_eq!(e.display_text, "");
    assert_eq!(s.memory(), 3.0);
}

#[test]
fn rpn_vue_de_pile_tronquee() {
    let mut s = RpnSession::new();
    let e = taper(&mut s, "1E2E3E4E");
    assert_eq!(e.history_text, "Pile : [... 2 3 4]");
    assert_eq!(e.display_text, "");
}

#[test]
fn rpn_precision_six_chiffres() {
    let mut s = RpnSession::new();
    assert_eq!(taper(&mut s, "1E3/").display_text, "0.333333");
}

#[test]
fn rpn_surbrillance_ephemere() {
    let mut s = RpnSession::new();
    taper(&mut s, "1E2-");
    let e = taper(&mut s, "5");
    assert_eq!(e.operator_highlight, None);
}
