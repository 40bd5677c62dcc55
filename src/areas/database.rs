//! Object database
//!
//! Durable key/value layer mapping an object id to a zlib-compressed object
//! file, sharded on disk by the first two hex characters of the id.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{IoResultExt, ObjectError, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::Path;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object, returning its id
    ///
    /// Content addressing makes this idempotent: identical objects map to
    /// the same path with byte-identical content, and distinct objects never
    /// share a path, so concurrent or repeated stores need no locking. An
    /// already-present object file is left untouched.
    pub fn store(&self, object: &impl Object) -> Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            let shard_dir = object_path
                .parent()
                .ok_or_else(|| ObjectError::InvalidObjectId(object_id.to_string()))?;
            std::fs::create_dir_all(shard_dir).with_path(shard_dir)?;

            self.write_object(shard_dir, &object_path, object.serialize()?)?;
        }

        Ok(object_id)
    }

    /// Load an object, returning its kind and raw payload
    ///
    /// The payload length is checked against the length declared in the
    /// header, so a forged or damaged object can never be returned silently.
    pub fn load(&self, object_id: &ObjectId) -> Result<(ObjectType, Bytes)> {
        let object_path = self.path.join(object_id.to_path());

        let compressed = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Err(ObjectError::ObjectNotFound(object_id.to_string()));
            }
            Err(source) => {
                return Err(ObjectError::Io {
                    path: object_path,
                    source,
                });
            }
        };

        let decompressed = Self::decompress(compressed.into())?;

        let mut reader = Cursor::new(&decompressed);
        let (object_type, declared_size) = ObjectType::parse_header(&mut reader)?;

        let payload = decompressed.slice(reader.position() as usize..);
        if payload.len() != declared_size {
            return Err(ObjectError::LengthMismatch {
                declared: declared_size,
                actual: payload.len(),
            });
        }

        Ok((object_type, payload))
    }

    /// Decode an object into its typed in-memory form
    pub fn parse_object(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        let (object_type, payload) = self.load(object_id)?;
        let reader = Cursor::new(payload);

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(reader)?))),
        }
    }

    fn write_object(&self, shard_dir: &Path, object_path: &Path, object_content: Bytes) -> Result<()> {
        let temp_object_path = shard_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(&object_content).with_path(object_path)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .with_path(&*temp_object_path)?;

        file.write_all(&object_content)
            .with_path(&*temp_object_path)?;

        // rename the temp file onto the object path so a reader never sees
        // a partially written object
        std::fs::rename(&temp_object_path, object_path).with_path(object_path)?;

        Ok(())
    }

    fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;
        encoder.finish()
    }

    fn decompress(data: Bytes) -> Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|source| ObjectError::CorruptObject(source.to_string()))?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    fn temp_database() -> (assert_fs::TempDir, Database) {
        let dir = assert_fs::TempDir::new().unwrap();
        let database = Database::new(dir.path().join("objects").into_boxed_path());
        (dir, database)
    }

    #[test]
    fn store_then_load_round_trips_binary_payloads() {
        let (_dir, database) = temp_database();
        let payload = b"\x00\x01binary\xffcontent\x00".as_slice();

        let object_id = database.store(&Blob::new(Bytes::copy_from_slice(payload))).unwrap();
        let (object_type, loaded) = database.load(&object_id).unwrap();

        assert_eq!(object_type, ObjectType::Blob);
        assert_eq!(loaded.as_ref(), payload);
    }

    #[test]
    fn load_of_missing_object_reports_not_found() {
        let (_dir, database) = temp_database();
        let absent =
            ObjectId::try_parse("0123456789abcdef0123456789abcdef01234567".to_string()).unwrap();

        let err = database.load(&absent).unwrap_err();
        assert!(matches!(err, ObjectError::ObjectNotFound(_)));
    }

    #[test]
    fn object_file_lands_in_digest_sharded_path() {
        let (_dir, database) = temp_database();

        let object_id = database.store(&Blob::new(Bytes::from_static(b""))).unwrap();

        assert_eq!(object_id.as_ref(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
        let object_path = database
            .objects_path()
            .join("e6")
            .join("9de29bb2d1d6434b8b29ae775ad8c2e48c5391");
        assert!(object_path.is_file());
    }

    #[test]
    fn store_is_idempotent() {
        let (_dir, database) = temp_database();
        let blob = Blob::new(Bytes::from_static(b"same content"));

        let first = database.store(&blob).unwrap();
        let second = database.store(&blob).unwrap();
        assert_eq!(first, second);

        let shard_dir = database.objects_path().join(&first.as_ref()[..2]);
        let files: Vec<_> = std::fs::read_dir(&shard_dir).unwrap().collect();
        assert_eq!(files.len(), 1);

        let (_, payload) = database.load(&first).unwrap();
        assert_eq!(payload.as_ref(), b"same content");
    }

    #[test]
    fn bit_flipped_object_is_reported_as_corrupt() {
        let (_dir, database) = temp_database();
        let object_id = database
            .store(&Blob::new(Bytes::from_static(b"soon to be damaged")))
            .unwrap();
        let object_path = database.objects_path().join(object_id.to_path());

        let mut raw = std::fs::read(&object_path).unwrap();
        let middle = raw.len() / 2;
        raw[middle] ^= 0xff;
        std::fs::write(&object_path, raw).unwrap();

        let err = database.load(&object_id).unwrap_err();
        assert!(matches!(err, ObjectError::CorruptObject(_)));
    }

    #[test]
    fn truncated_object_is_reported_as_corrupt() {
        let (_dir, database) = temp_database();
        let object_id = database
            .store(&Blob::new(Bytes::from_static(b"soon to be truncated")))
            .unwrap();
        let object_path = database.objects_path().join(object_id.to_path());

        let raw = std::fs::read(&object_path).unwrap();
        std::fs::write(&object_path, &raw[..raw.len() / 2]).unwrap();

        let err = database.load(&object_id).unwrap_err();
        assert!(matches!(err, ObjectError::CorruptObject(_)));
    }

    /// Plant a compressed buffer at an arbitrary valid object path, so the
    /// decode path can be exercised with forged headers.
    fn plant_object(database: &Database, raw: &[u8]) -> ObjectId {
        let object_id =
            ObjectId::try_parse("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string()).unwrap();
        let object_path = database.objects_path().join(object_id.to_path());
        std::fs::create_dir_all(object_path.parent().unwrap()).unwrap();
        std::fs::write(&object_path, Database::compress(raw).unwrap()).unwrap();
        object_id
    }

    #[test]
    fn declared_length_is_checked_against_payload() {
        let (_dir, database) = temp_database();
        let object_id = plant_object(&database, b"blob 3\0hello");

        let err = database.load(&object_id).unwrap_err();
        assert!(matches!(
            err,
            ObjectError::LengthMismatch {
                declared: 3,
                actual: 5
            }
        ));
    }

    #[test]
    fn header_without_nul_is_reported_as_malformed() {
        let (_dir, database) = temp_database();
        let object_id = plant_object(&database, b"blob 5");

        let err = database.load(&object_id).unwrap_err();
        assert!(matches!(err, ObjectError::MalformedHeader(_)));
    }

    #[test]
    fn non_numeric_length_is_reported_as_malformed() {
        let (_dir, database) = temp_database();
        let object_id = plant_object(&database, b"blob five\0hello");

        let err = database.load(&object_id).unwrap_err();
        assert!(matches!(err, ObjectError::MalformedHeader(_)));
    }

    #[test]
    fn stored_tree_parses_back_into_entries() {
        let (_dir, database) = temp_database();
        let blob_id = database
            .store(&Blob::new(Bytes::from_static(b"hello\n")))
            .unwrap();

        let tree = Tree::build([("hello.txt".to_string(), blob_id.clone())]);
        let tree_id = database.store(&tree).unwrap();

        match database.parse_object(&tree_id).unwrap() {
            ObjectBox::Tree(parsed) => {
                let entries: Vec<_> = parsed.entries().collect();
                assert_eq!(entries, vec![(&"hello.txt".to_string(), &blob_id)]);
            }
            ObjectBox::Blob(_) => panic!("expected a tree object"),
        }
    }

    proptest! {
        #[test]
        fn store_load_round_trip(payload in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..512)) {
            let (_dir, database) = temp_database();
            let blob = Blob::new(Bytes::from(payload.clone()));

            let object_id = database.store(&blob).unwrap();
            let (object_type, loaded) = database.load(&object_id).unwrap();

            assert_eq!(object_type, ObjectType::Blob);
            assert_eq!(loaded.as_ref(), payload.as_slice());
        }
    }
}
