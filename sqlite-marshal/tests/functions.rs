//!
//! # User-defined Function Tests
//!
//! Registers raw SQLite functions whose bodies read their arguments with
//! `Arguments::get` and return through `FunctionContext::produce`.
//!

mod common;

use std::ffi::c_int;

use common::Db;
use rusqlite::ffi;
use sqlite_marshal::{
    Arguments, FunctionContext, Null, Source, StorageClass, Union2, Utf16String,
};

sqlite_marshal::tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    enum Scalar {
        Nothing(Null),
        Int(i64),
        Real(f64),
        Text(String),
        Bytes(Vec<u8>),
    }
}

unsafe extern "C" fn echo(
    ctx: *mut ffi::sqlite3_context,
    argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    let args = unsafe { Arguments::from_raw(argc, argv) };
    let mut context = unsafe { FunctionContext::from_raw(ctx) };
    match args.get::<Scalar>(0) {
        Ok(value) => context.produce(&value),
        Err(err) => unsafe { ffi::sqlite3_result_error_code(ctx, err.code()) },
    }
}

unsafe extern "C" fn int_or_text(
    ctx: *mut ffi::sqlite3_context,
    argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    let args = unsafe { Arguments::from_raw(argc, argv) };
    let mut context = unsafe { FunctionContext::from_raw(ctx) };
    match args.get::<Union2<i64, String>>(0) {
        Ok(Union2::First(n)) => context.produce(&(n * 2)),
        Ok(Union2::Second(text)) => context.produce(&text.to_uppercase()),
        Err(err) => unsafe { ffi::sqlite3_result_error_code(ctx, err.code()) },
    }
}

unsafe extern "C" fn describe(
    ctx: *mut ffi::sqlite3_context,
    argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    let args = unsafe { Arguments::from_raw(argc, argv) };
    let mut context = unsafe { FunctionContext::from_raw(ctx) };
    let classes: Vec<&str> = args.iter().map(|value| value.storage_class().name()).collect();
    context.produce(&classes.join(","));
}

unsafe extern "C" fn maybe_double(
    ctx: *mut ffi::sqlite3_context,
    argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    let args = unsafe { Arguments::from_raw(argc, argv) };
    let mut context = unsafe { FunctionContext::from_raw(ctx) };
    let doubled = args
        .get::<Option<Box<i64>>>(0)
        .map(|value| value.map(|n| Box::new(*n * 2)));
    match doubled {
        Ok(result) => context.produce(&result),
        Err(err) => unsafe { ffi::sqlite3_result_error_code(ctx, err.code()) },
    }
}

unsafe extern "C" fn widen(
    ctx: *mut ffi::sqlite3_context,
    argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    let args = unsafe { Arguments::from_raw(argc, argv) };
    let mut context = unsafe { FunctionContext::from_raw(ctx) };
    match args.get::<Utf16String>(0) {
        Ok(text) => context.produce(&text),
        Err(err) => unsafe { ffi::sqlite3_result_error_code(ctx, err.code()) },
    }
}

unsafe extern "C" fn squares(
    ctx: *mut ffi::sqlite3_context,
    argc: c_int,
    argv: *mut *mut ffi::sqlite3_value,
) {
    let args = unsafe { Arguments::from_raw(argc, argv) };
    let mut context = unsafe { FunctionContext::from_raw(ctx) };
    match args.get::<u32>(0) {
        Ok(count) => {
            let values: Vec<i32> = (0..count as i32).map(|i| i * i).collect();
            context.produce(&values);
        }
        Err(err) => unsafe { ffi::sqlite3_result_error_code(ctx, err.code()) },
    }
}

fn call<T: sqlite_marshal::Decode>(db: &Db, sql: &str) -> sqlite_marshal::Result<T> {
    let mut stmt = db.prepare(sql);
    assert_eq!(stmt.step(), ffi::SQLITE_ROW);
    stmt.row().get::<T>(0)
}

#[test]
fn test_echo_preserves_every_class() {
    let db = Db::open();
    db.register("echo", 1, echo);

    assert_eq!(call::<Scalar>(&db, "SELECT echo(NULL)"), Ok(Scalar::Nothing(Null)));
    assert_eq!(call::<Scalar>(&db, "SELECT echo(7)"), Ok(Scalar::Int(7)));
    assert_eq!(call::<Scalar>(&db, "SELECT echo(2.5)"), Ok(Scalar::Real(2.5)));
    assert_eq!(
        call::<Scalar>(&db, "SELECT echo('hi')"),
        Ok(Scalar::Text("hi".to_string()))
    );
    assert_eq!(
        call::<Scalar>(&db, "SELECT echo(x'00ff')"),
        Ok(Scalar::Bytes(vec![0x00, 0xff]))
    );
}

#[test]
fn test_bound_argument_reaches_function() {
    let db = Db::open();
    db.register("int_or_text", 1, int_or_text);

    let mut stmt = db.prepare("SELECT int_or_text(?1)");
    assert!(stmt.bind(1, &21i64).is_ok());
    assert_eq!(stmt.step(), ffi::SQLITE_ROW);
    assert_eq!(stmt.row().get::<i64>(0), Ok(42));
    stmt.reset();

    assert!(stmt.bind(1, "abc").is_ok());
    assert_eq!(stmt.step(), ffi::SQLITE_ROW);
    assert_eq!(stmt.row().get::<String>(0), Ok("ABC".to_string()));
}

#[test]
fn test_argument_mismatch_reported_through_result_error() {
    let db = Db::open();
    db.register("int_or_text", 1, int_or_text);

    let mut stmt = db.prepare("SELECT int_or_text(1.5)");
    assert_eq!(stmt.step(), ffi::SQLITE_MISMATCH);
}

#[test]
fn test_arguments_report_storage_classes() {
    let db = Db::open();
    db.register("describe", -1, describe);

    assert_eq!(
        call::<String>(&db, "SELECT describe(NULL, 1, 1.0, 'a', x'01')"),
        Ok("null,integer,float,text,blob".to_string())
    );
    assert_eq!(call::<String>(&db, "SELECT describe()"), Ok(String::new()));
}

#[test]
fn test_nullable_owned_pointer_result() {
    let db = Db::open();
    db.register("maybe_double", 1, maybe_double);

    assert_eq!(call::<Option<i64>>(&db, "SELECT maybe_double(4)"), Ok(Some(8)));
    assert_eq!(call::<Option<i64>>(&db, "SELECT maybe_double(NULL)"), Ok(None));
    assert_eq!(call::<i64>(&db, "SELECT maybe_double(NULL)"), Ok(0));

    let mut stmt = db.prepare("SELECT typeof(maybe_double(NULL))");
    assert_eq!(stmt.step(), ffi::SQLITE_ROW);
    assert_eq!(stmt.row().get::<String>(0), Ok("null".to_string()));
}

#[test]
fn test_utf16_result() {
    let db = Db::open();
    db.register("widen", 1, widen);

    assert_eq!(
        call::<String>(&db, "SELECT widen('grüße')"),
        Ok("grüße".to_string())
    );
    assert_eq!(call::<String>(&db, "SELECT widen(NULL)"), Ok(String::new()));
}

#[test]
fn test_sequence_result() {
    let db = Db::open();
    db.register("squares", 1, squares);

    assert_eq!(
        call::<Vec<i32>>(&db, "SELECT squares(5)"),
        Ok(vec![0, 1, 4, 9, 16])
    );
    assert_eq!(call::<usize>(&db, "SELECT length(squares(5))"), Ok(20));

    let mut stmt = db.prepare("SELECT typeof(squares(0))");
    assert_eq!(stmt.step(), ffi::SQLITE_ROW);
    assert_eq!(stmt.row().column(0).storage_class(), StorageClass::Text);
    assert_eq!(stmt.row().get::<String>(0), Ok("blob".to_string()));
}
