//! End-to-end scenarios run against the built `thfk` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn thfk() -> Command {
    Command::cargo_bin("thfk").unwrap()
}

#[test]
fn unknot_is_null_homologous_on_every_invariant() {
    thfk()
        .args(["-s", "-i", "2", "-X", "[1,2]", "-O", "[2,1]"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("LL is null-homologous")
                .and(predicate::str::contains("UR is null-homologous"))
                .and(predicate::str::contains("D1[LL] is null-homologous"))
                .and(predicate::str::contains("D1[UR] is null-homologous")),
        );
}

#[test]
fn trefoil_max_tb_is_null_homologous() {
    thfk()
        .args(["-s", "-i", "5", "-X", "[1,2,3,4,5]", "-O", "[2,3,4,5,1]"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("LL is null-homologous")
                .and(predicate::str::contains("UR is null-homologous"))
                .and(predicate::str::contains("D1[LL] is null-homologous"))
                .and(predicate::str::contains("D1[UR] is null-homologous")),
        );
}

#[test]
fn lift_of_the_unknot_is_null_homologous() {
    thfk()
        .args(["-s", "-i", "2", "-X", "[1,2]", "-O", "[2,1]", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theta_2 is null-homologous"));
}

#[test]
fn malformed_xs_is_rejected_with_a_non_zero_exit_code() {
    thfk()
        .args(["-s", "-i", "2", "-X", "[1,1]", "-O", "[2,1]"])
        .assert()
        .failure();
}

#[test]
fn arc_index_below_two_is_rejected() {
    thfk()
        .args(["-s", "-i", "1", "-X", "[1]", "-O", "[1]"])
        .assert()
        .failure();
}

#[test]
fn malformed_permutation_syntax_is_rejected_by_the_argument_parser() {
    thfk()
        .args(["-s", "-i", "2", "-X", "1,2", "-O", "[2,1]"])
        .assert()
        .failure();
}

#[test]
fn quiet_mode_prints_the_grid_diagram() {
    thfk()
        .args(["-q", "-i", "2", "-X", "[1,2]", "-O", "[2,1]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X").and(predicate::str::contains("O")));
}
